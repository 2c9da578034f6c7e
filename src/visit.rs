//! Depth-first traversal of artboard scene graphs.
//!
//! Implement [`NodeVisitor`] and hand it to [`walk_file`], [`walk_artboard`]
//! or [`walk_objects`]. Traversal follows clip-path children, group
//! children and component states, in that order; the returned
//! [`VisitAction`] prunes or stops it.
//!
//! # Example
//!
//! ```no_run
//! use unxd::visit::{walk_file, NodeVisitor, VisitAction};
//! use unxd::model::XdObject;
//!
//! struct Names(Vec<String>);
//!
//! impl<'a> NodeVisitor<'a> for Names {
//!     fn visit_object(&mut self, object: &'a XdObject, _depth: usize) -> VisitAction {
//!         if let Some(name) = object.display_name() {
//!             self.0.push(name.to_string());
//!         }
//!         VisitAction::Continue
//!     }
//! }
//!
//! let file = unxd::parse_file("design.xd").unwrap();
//! let mut names = Names(Vec::new());
//! walk_file(&file, &mut names);
//! ```

use std::collections::{HashMap, HashSet};

use crate::model::{Artboard, ObjectKind, PatternMeta, XdFile, XdObject};

/// Action returned by visitor methods to steer traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisitAction {
    /// Descend into children and keep going.
    #[default]
    Continue,

    /// Do not descend into this node's children.
    SkipChildren,

    /// End the traversal.
    Stop,
}

impl VisitAction {
    /// Check if this action ends the traversal.
    pub fn is_stop(&self) -> bool {
        matches!(self, VisitAction::Stop)
    }
}

/// Callbacks invoked while walking a container.
///
/// The lifetime lets visitors keep references into the walked graph.
pub trait NodeVisitor<'a> {
    /// Called before an artboard's nodes are walked.
    ///
    /// `SkipChildren` skips the artboard; `Stop` ends the walk.
    fn on_artboard_start(&mut self, artboard: &'a Artboard) -> VisitAction {
        let _ = artboard;
        VisitAction::Continue
    }

    /// Called after an artboard's nodes were walked, unless the walk stopped.
    fn on_artboard_end(&mut self, artboard: &'a Artboard) {
        let _ = artboard;
    }

    /// Called for every node, parents before children.
    fn visit_object(&mut self, object: &'a XdObject, depth: usize) -> VisitAction;
}

/// Walk a list of sibling nodes at `depth`.
///
/// Returns [`VisitAction::Stop`] if the visitor stopped the traversal.
pub fn walk_objects<'a, V>(objects: &'a [XdObject], visitor: &mut V, depth: usize) -> VisitAction
where
    V: NodeVisitor<'a> + ?Sized,
{
    for object in objects {
        match visitor.visit_object(object, depth) {
            VisitAction::Stop => return VisitAction::Stop,
            VisitAction::SkipChildren => continue,
            VisitAction::Continue => {}
        }
        if walk_objects(object.clip_path_children(), visitor, depth + 1).is_stop() {
            return VisitAction::Stop;
        }
        if walk_objects(object.children(), visitor, depth + 1).is_stop() {
            return VisitAction::Stop;
        }
        if walk_objects(object.states(), visitor, depth + 1).is_stop() {
            return VisitAction::Stop;
        }
    }
    VisitAction::Continue
}

/// Walk one artboard's scene graph.
pub fn walk_artboard<'a, V>(artboard: &'a Artboard, visitor: &mut V) -> VisitAction
where
    V: NodeVisitor<'a> + ?Sized,
{
    match visitor.on_artboard_start(artboard) {
        VisitAction::Stop => return VisitAction::Stop,
        VisitAction::SkipChildren => return VisitAction::Continue,
        VisitAction::Continue => {}
    }
    if walk_objects(artboard.objects(), visitor, 0).is_stop() {
        return VisitAction::Stop;
    }
    visitor.on_artboard_end(artboard);
    VisitAction::Continue
}

/// Walk every artboard in manifest order.
pub fn walk_file<'a, V>(file: &'a XdFile, visitor: &mut V) -> VisitAction
where
    V: NodeVisitor<'a> + ?Sized,
{
    for artboard in file.artboards() {
        if walk_artboard(artboard, visitor).is_stop() {
            return VisitAction::Stop;
        }
    }
    VisitAction::Continue
}

/// Collects pattern-fill references that carry a content id.
///
/// Each id is kept once, in first-seen order.
#[derive(Debug, Default)]
pub struct PatternCollector<'a> {
    metas: Vec<&'a PatternMeta>,
    seen: HashSet<&'a str>,
}

impl<'a> PatternCollector<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected references.
    pub fn metas(&self) -> &[&'a PatternMeta] {
        &self.metas
    }

    pub fn into_metas(self) -> Vec<&'a PatternMeta> {
        self.metas
    }
}

impl<'a> NodeVisitor<'a> for PatternCollector<'a> {
    fn visit_object(&mut self, object: &'a XdObject, _depth: usize) -> VisitAction {
        let meta = object
            .style
            .as_ref()
            .and_then(|style| style.pattern())
            .and_then(|pattern| pattern.meta.as_ref());
        if let Some(meta) = meta {
            if let Some(uid) = meta.uid() {
                if self.seen.insert(uid) {
                    self.metas.push(meta);
                }
            }
        }
        VisitAction::Continue
    }
}

/// Counts nodes by kind.
#[derive(Debug, Clone, Default)]
pub struct ObjectCounter {
    counts: HashMap<ObjectKind, usize>,
    total: usize,
    max_depth: usize,
}

impl ObjectCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes of the given kind.
    pub fn count(&self, kind: ObjectKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// All nodes visited.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Deepest nesting level seen (top level is 0).
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl<'a> NodeVisitor<'a> for ObjectCounter {
    fn visit_object(&mut self, object: &'a XdObject, depth: usize) -> VisitAction {
        *self.counts.entry(object.kind()).or_insert(0) += 1;
        self.total += 1;
        self.max_depth = self.max_depth.max(depth);
        VisitAction::Continue
    }
}
