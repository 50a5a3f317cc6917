//! Configures how data from vertex buffers is read into vertex shader input locations.
//!
//! Only the bindings are described here. When [`DynamicState::VertexInput`] is used the whole
//! description comes from the command buffer, and when [`DynamicState::VertexInputBindingStride`]
//! is used the strides do.
//!
//! [`DynamicState::VertexInput`]: crate::pipeline::DynamicState::VertexInput
//! [`DynamicState::VertexInputBindingStride`]: crate::pipeline::DynamicState::VertexInputBindingStride

use crate::{macros::vulkan_enum, ValidationError};
use foldhash::HashSet;

/// The state in a graphics pipeline describing how the vertex input stage should behave.
#[derive(Clone, Debug, Default)]
pub struct VertexInputState {
    /// The vertex buffer bindings that the pipeline reads from.
    pub bindings: Vec<VertexInputBindingDescription>,
}

impl VertexInputState {
    /// Constructs a new `VertexInputState` with no bindings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binding.
    #[inline]
    pub fn binding(mut self, binding: VertexInputBindingDescription) -> Self {
        self.bindings.push(binding);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), Box<ValidationError>> {
        let mut seen = HashSet::default();

        for (index, description) in self.bindings.iter().enumerate() {
            if !seen.insert(description.binding) {
                return Err(Box::new(ValidationError {
                    context: format!("bindings[{}].binding", index).into(),
                    problem: "is not unique among the bindings".into(),
                    vuids: &[
                        "VUID-VkPipelineVertexInputStateCreateInfo-pVertexBindingDescriptions-00616",
                    ],
                    ..Default::default()
                }));
            }
        }

        Ok(())
    }
}

/// Describes a single vertex buffer binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexInputBindingDescription {
    /// The binding number.
    pub binding: u32,

    /// The number of bytes from the start of one element in the vertex buffer to the start of
    /// the next element.
    pub stride: u32,

    /// How often the vertex input should advance to the next element.
    pub input_rate: VertexInputRate,
}

vulkan_enum! {
    /// How the vertex source should be unrolled.
    VertexInputRate = VertexInputRate(i32);

    /// Each element of the source corresponds to a vertex.
    Vertex = VERTEX,

    /// Each element of the source corresponds to an instance.
    Instance = INSTANCE,
}
