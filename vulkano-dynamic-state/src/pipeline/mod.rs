//! Descriptions of compiled graphics pipelines, as far as dynamic state is concerned.
//!
//! A pipeline is described once, when it is created, by a
//! [`GraphicsPipelineState`](graphics::GraphicsPipelineState). The description is immutable and
//! shared by every command buffer that binds the pipeline. Command buffers do not hold on to the
//! description itself; they hold the pipeline handle, and look the description up in a
//! [`PipelineTable`] each time they need it.

pub use self::dynamic_state::{DynamicState, DynamicStates, DynamicStatesIter};
use self::graphics::GraphicsPipelineState;
use foldhash::HashMap;
use parking_lot::RwLock;
use std::sync::Arc;

mod dynamic_state;
pub mod graphics;

/// The part of a graphics pipeline's create info that a dynamic state belongs to.
///
/// A state that is not dynamic is baked into the pipeline only if the pipeline was created with
/// the sub-state it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateGroup {
    VertexInput,
    InputAssembly,
    Tessellation,
    Viewport,
    Rasterization,
    Multisample,
    DepthStencil,
    ColorBlend,
    DiscardRectangle,
    FragmentShadingRate,
    /// Never part of a graphics pipeline.
    RayTracing,
}

/// The set of graphics pipelines that command buffers can bind, keyed by handle.
///
/// Readers never block each other. Pipelines are added when they are created and removed when
/// they are destroyed; a command buffer that still refers to a removed pipeline gets a violation
/// at its next draw instead of a dangling reference.
#[derive(Debug)]
pub struct PipelineTable {
    inner: RwLock<HashMap<ash::vk::Pipeline, Arc<GraphicsPipelineState>>>,
}

impl Default for PipelineTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineTable {
    /// Creates an empty `PipelineTable`.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::default()),
        }
    }

    /// Adds a pipeline to the table, replacing any pipeline with the same handle.
    pub fn insert(
        &self,
        pipeline: Arc<GraphicsPipelineState>,
    ) -> Option<Arc<GraphicsPipelineState>> {
        let handle = pipeline.handle();
        log::trace!(
            target: "vulkano_dynamic_state",
            "registered pipeline {:?} with dynamic states {:?}",
            handle,
            pipeline.dynamic_state(),
        );

        self.inner.write().insert(handle, pipeline)
    }

    /// Removes the pipeline with the given handle from the table.
    pub fn remove(&self, handle: ash::vk::Pipeline) -> Option<Arc<GraphicsPipelineState>> {
        self.inner.write().remove(&handle)
    }

    /// Returns the pipeline with the given handle, if it is in the table.
    pub fn get(&self, handle: ash::vk::Pipeline) -> Option<Arc<GraphicsPipelineState>> {
        self.inner.read().get(&handle).cloned()
    }

    /// Returns whether the table contains a pipeline with the given handle.
    pub fn contains(&self, handle: ash::vk::Pipeline) -> bool {
        self.inner.read().contains_key(&handle)
    }

    /// Returns the number of pipelines in the table.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
