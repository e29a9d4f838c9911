//! # Highlight Coordinator
//!
//! Tracks which point-cloud objects are highlighted and recolors the cloud
//! to match.
//!
//! ## States
//!
//! ```text
//! Idle ──configure_object_list(L)──▶ Highlighting(L)
//! Highlighting(L) ──configure_object_list(L)──▶ Highlighting(L)   (no writes)
//! Highlighting(L) ──configure_object_list(M)──▶ Highlighting(M)
//! any ──unhighlight──▶ Idle
//! ```
//!
//! While highlighting, objects in the list show their own color and every
//! other object shows the cloud's deemphasized color. In `Idle` every object
//! shows its own color.
//!
//! The coordinator never stores the cloud. Each call receives it, so the
//! borrow checker serializes all writes to the color buffers.


use tracing::debug;

use crate::point_cloud::{ObjectId, PointCloud};

/// Highlighted set recorded against the cloud generation it was applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Highlighted {
    generation: u64,
    objects: Vec<ObjectId>,
}

/// Owner of the highlight state for one point cloud.
///
/// # Example
///
/// ```rust
/// use spacewalk_highlight::{Color, HighlightCoordinator, ObjectId, PointCloud, PointCloudMesh};
///
/// let mut cloud = PointCloud::default();
/// cloud.configure(vec![
///     PointCloudMesh::new(ObjectId(1), 4, Color::new(1.0, 0.0, 0.0)),
///     PointCloudMesh::new(ObjectId(2), 4, Color::new(0.0, 0.0, 1.0)),
/// ]);
///
/// let mut highlighter = HighlightCoordinator::new();
/// highlighter.configure_object_list(&mut cloud, &[ObjectId(1)]);
/// assert_eq!(cloud.mesh(ObjectId(2)).unwrap().point_color(0), Some(Color::DEEMPHASIZED));
///
/// highlighter.unhighlight(&mut cloud);
/// assert_eq!(cloud.mesh(ObjectId(2)).unwrap().point_color(0), Some(Color::new(0.0, 0.0, 1.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HighlightCoordinator {
    highlighted: Option<Highlighted>,
}

impl HighlightCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `object_list` the highlighted set.
    ///
    /// An unpopulated cloud only clears the record. The same list against the
    /// same cloud generation is a no-op. Otherwise the previous highlight is
    /// undone and the new one applied.
    pub fn configure_object_list(&mut self, cloud: &mut PointCloud, object_list: &[ObjectId]) {
        if !cloud.is_populated() {
            debug!("point cloud empty, highlight cleared");
            self.highlighted = None;
            return;
        }

        if let Some(current) = &self.highlighted {
            if current.generation == cloud.generation() && current.objects == object_list {
                return;
            }
        }

        self.unhighlight(cloud);
        self.highlighted = Some(Highlighted {
            generation: cloud.generation(),
            objects: object_list.to_vec(),
        });
        self.highlight(cloud);
    }

    /// Paints the cloud for the recorded list: deemphasize everything, then
    /// restore the listed objects. Ids missing from the cloud are skipped.
    pub fn highlight(&self, cloud: &mut PointCloud) {
        let Some(highlighted) = &self.highlighted else {
            return;
        };
        if !cloud.is_populated() {
            return;
        }

        cloud.deemphasize_all();
        let mut missing = 0usize;
        for &id in &highlighted.objects {
            if !cloud.restore(id) {
                missing += 1;
            }
        }
        debug!(
            highlighted = highlighted.objects.len() - missing,
            missing,
            "point cloud highlighted"
        );
    }

    /// Restores every object's own color and forgets the highlighted list.
    pub fn unhighlight(&mut self, cloud: &mut PointCloud) {
        if cloud.is_populated() {
            cloud.restore_all();
        }
        self.highlighted = None;
    }

    /// Highlights the single object under a pick, unless it is already part
    /// of the highlighted set.
    pub fn process_hit(&mut self, cloud: &mut PointCloud, hit: ObjectId) {
        if self.has_object(hit) {
            return;
        }
        self.configure_object_list(cloud, &[hit]);
    }

    pub fn has_object(&self, id: ObjectId) -> bool {
        self.objects().is_some_and(|objects| objects.contains(&id))
    }

    /// The recorded highlighted list, or `None` when idle.
    pub fn objects(&self) -> Option<&[ObjectId]> {
        self.highlighted.as_ref().map(|h| h.objects.as_slice())
    }

    pub fn is_highlighting(&self) -> bool {
        self.highlighted.is_some()
    }
}
