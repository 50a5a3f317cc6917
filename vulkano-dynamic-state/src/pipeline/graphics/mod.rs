//! The dynamic-state view of a graphics pipeline.
//!
//! A graphics pipeline is made of several sub-states, each of which configures one stage of the
//! graphics pipeline. When a pipeline is created, some of the states in a sub-state can be
//! declared dynamic with [`GraphicsPipelineCreateInfo::dynamic_state`]. The values of those
//! states are then ignored, and must be set on the command buffer before drawing.
//!
//! Every other state that belongs to a sub-state the pipeline was created with is *static*: its
//! value is baked into the pipeline, and binding the pipeline overwrites whatever a command
//! buffer had set for it. States that belong to a sub-state the pipeline was created without are
//! neither dynamic nor static, and a pipeline has no use for them.

use self::{
    color_blend::ColorBlendState,
    depth_stencil::DepthStencilState,
    discard_rectangle::DiscardRectangleState,
    fragment_shading_rate::FragmentShadingRateState,
    input_assembly::{InputAssemblyState, PrimitiveTopology},
    multisample::MultisampleState,
    rasterization::RasterizationState,
    tessellation::TessellationState,
    vertex_input::VertexInputState,
    viewport::ViewportState,
};
use crate::{
    device::Device,
    pipeline::{DynamicState, DynamicStates, StateGroup},
    ValidationError,
};
use std::sync::Arc;

pub mod color_blend;
pub mod depth_stencil;
pub mod discard_rectangle;
pub mod fragment_shading_rate;
pub mod input_assembly;
pub mod multisample;
pub mod rasterization;
pub mod tessellation;
pub mod vertex_input;
pub mod viewport;

/// Parameters to describe a new graphics pipeline.
#[derive(Clone, Debug)]
pub struct GraphicsPipelineCreateInfo {
    /// The vertex input state.
    ///
    /// The default value is `None`.
    pub vertex_input_state: Option<VertexInputState>,

    /// The input assembly state.
    ///
    /// The default value is `None`.
    pub input_assembly_state: Option<InputAssemblyState>,

    /// The tessellation state.
    ///
    /// This state is used if the pipeline has tessellation shaders.
    ///
    /// The default value is `None`.
    pub tessellation_state: Option<TessellationState>,

    /// The viewport state.
    ///
    /// This state is used if rasterization is possible.
    ///
    /// The default value is `None`.
    pub viewport_state: Option<ViewportState>,

    /// The rasterization state.
    ///
    /// The default value is `None`.
    pub rasterization_state: Option<RasterizationState>,

    /// The multisample state.
    ///
    /// The default value is `None`.
    pub multisample_state: Option<MultisampleState>,

    /// The depth/stencil state.
    ///
    /// The default value is `None`.
    pub depth_stencil_state: Option<DepthStencilState>,

    /// The color blend state.
    ///
    /// The default value is `None`.
    pub color_blend_state: Option<ColorBlendState>,

    /// The discard rectangle state.
    ///
    /// The default value is `None`.
    pub discard_rectangle_state: Option<DiscardRectangleState>,

    /// The fragment shading rate state.
    ///
    /// The default value is `None`.
    pub fragment_shading_rate_state: Option<FragmentShadingRateState>,

    /// The topology of the primitives that reach the rasterizer, if a tessellation or geometry
    /// shader replaces the topology that was assembled.
    ///
    /// The default value is `None`.
    pub pre_rasterization_topology: Option<PrimitiveTopology>,

    /// The state(s) that will be set dynamically when recording a command buffer.
    ///
    /// The default value is empty.
    pub dynamic_state: DynamicStates,

    pub _ne: crate::NonExhaustive,
}

impl Default for GraphicsPipelineCreateInfo {
    #[inline]
    fn default() -> Self {
        Self {
            vertex_input_state: None,
            input_assembly_state: None,
            tessellation_state: None,
            viewport_state: None,
            rasterization_state: None,
            multisample_state: None,
            depth_stencil_state: None,
            color_blend_state: None,
            discard_rectangle_state: None,
            fragment_shading_rate_state: None,
            pre_rasterization_topology: None,
            dynamic_state: DynamicStates::empty(),
            _ne: crate::NonExhaustive(()),
        }
    }
}

impl GraphicsPipelineCreateInfo {
    /// Returns whether the pipeline was described with the sub-state that `group` names.
    pub fn has_state_group(&self, group: StateGroup) -> bool {
        match group {
            StateGroup::VertexInput => self.vertex_input_state.is_some(),
            StateGroup::InputAssembly => self.input_assembly_state.is_some(),
            StateGroup::Tessellation => self.tessellation_state.is_some(),
            StateGroup::Viewport => self.viewport_state.is_some(),
            StateGroup::Rasterization => self.rasterization_state.is_some(),
            StateGroup::Multisample => self.multisample_state.is_some(),
            StateGroup::DepthStencil => self.depth_stencil_state.is_some(),
            StateGroup::ColorBlend => self.color_blend_state.is_some(),
            StateGroup::DiscardRectangle => self.discard_rectangle_state.is_some(),
            StateGroup::FragmentShadingRate => self.fragment_shading_rate_state.is_some(),
            StateGroup::RayTracing => false,
        }
    }

    pub(crate) fn validate(&self, device: &Device) -> Result<(), Box<ValidationError>> {
        let &Self {
            ref vertex_input_state,
            ref input_assembly_state,
            ref tessellation_state,
            ref viewport_state,
            ref rasterization_state,
            ref multisample_state,
            ref depth_stencil_state,
            ref color_blend_state,
            ref discard_rectangle_state,
            ref fragment_shading_rate_state,
            pre_rasterization_topology: _,
            dynamic_state,
            _ne: _,
        } = self;

        if dynamic_state.contains_enum(DynamicState::RayTracingPipelineStackSize) {
            return Err(Box::new(ValidationError {
                context: "dynamic_state".into(),
                problem: "contains `DynamicState::RayTracingPipelineStackSize`, which is not a \
                    graphics pipeline state"
                    .into(),
                vuids: &["VUID-VkGraphicsPipelineCreateInfo-pDynamicStates-parameter"],
                ..Default::default()
            }));
        }

        if dynamic_state.contains_enum(DynamicState::Viewport)
            && dynamic_state.contains_enum(DynamicState::ViewportWithCount)
        {
            return Err(Box::new(ValidationError {
                context: "dynamic_state".into(),
                problem: "contains both `DynamicState::Viewport` and \
                    `DynamicState::ViewportWithCount`"
                    .into(),
                vuids: &["VUID-VkGraphicsPipelineCreateInfo-pDynamicStates-04132"],
                ..Default::default()
            }));
        }

        if dynamic_state.contains_enum(DynamicState::Scissor)
            && dynamic_state.contains_enum(DynamicState::ScissorWithCount)
        {
            return Err(Box::new(ValidationError {
                context: "dynamic_state".into(),
                problem: "contains both `DynamicState::Scissor` and \
                    `DynamicState::ScissorWithCount`"
                    .into(),
                vuids: &["VUID-VkGraphicsPipelineCreateInfo-pDynamicStates-04133"],
                ..Default::default()
            }));
        }

        for state in dynamic_state {
            if !state.is_supported_by(
                device.api_version(),
                device.enabled_features(),
                device.enabled_extensions(),
            ) {
                return Err(Box::new(ValidationError {
                    context: "dynamic_state".into(),
                    problem: format!("contains `DynamicState::{:?}`", state).into(),
                    requires_one_of: state.requires_one_of(),
                    ..Default::default()
                }));
            }
        }

        if let Some(vertex_input_state) = vertex_input_state {
            vertex_input_state
                .validate()
                .map_err(|err| err.add_context("vertex_input_state"))?;
        }

        if let Some(input_assembly_state) = input_assembly_state {
            input_assembly_state
                .validate(device, dynamic_state)
                .map_err(|err| err.add_context("input_assembly_state"))?;
        }

        if let Some(tessellation_state) = tessellation_state {
            tessellation_state
                .validate(device, dynamic_state)
                .map_err(|err| err.add_context("tessellation_state"))?;
        }

        if let Some(viewport_state) = viewport_state {
            viewport_state
                .validate(device, dynamic_state)
                .map_err(|err| err.add_context("viewport_state"))?;
        }

        if let Some(rasterization_state) = rasterization_state {
            rasterization_state
                .validate(device, dynamic_state)
                .map_err(|err| err.add_context("rasterization_state"))?;
        }

        if let Some(multisample_state) = multisample_state {
            multisample_state
                .validate(device)
                .map_err(|err| err.add_context("multisample_state"))?;
        }

        if let Some(depth_stencil_state) = depth_stencil_state {
            depth_stencil_state
                .validate(dynamic_state)
                .map_err(|err| err.add_context("depth_stencil_state"))?;
        }

        if let Some(color_blend_state) = color_blend_state {
            color_blend_state
                .validate(device, dynamic_state)
                .map_err(|err| err.add_context("color_blend_state"))?;
        }

        if let Some(discard_rectangle_state) = discard_rectangle_state {
            discard_rectangle_state
                .validate(device)
                .map_err(|err| err.add_context("discard_rectangle_state"))?;
        }

        if let Some(fragment_shading_rate_state) = fragment_shading_rate_state {
            fragment_shading_rate_state
                .validate(device, dynamic_state)
                .map_err(|err| err.add_context("fragment_shading_rate_state"))?;
        }

        if let (Some(input_assembly_state), Some(_)) = (input_assembly_state, tessellation_state) {
            let topology_unrestricted = dynamic_state
                .contains_enum(DynamicState::PrimitiveTopology)
                && device
                    .properties()
                    .dynamic_primitive_topology_unrestricted
                    .unwrap_or(false);

            if !topology_unrestricted
                && input_assembly_state.topology != PrimitiveTopology::PatchList
            {
                return Err(Box::new(ValidationError {
                    problem: "`tessellation_state` is `Some`, but \
                        `input_assembly_state.topology` is not `PrimitiveTopology::PatchList`"
                        .into(),
                    vuids: &["VUID-VkGraphicsPipelineCreateInfo-pStages-00736"],
                    ..Default::default()
                }));
            }
        }

        Ok(())
    }
}

/// The immutable description of a compiled graphics pipeline.
///
/// This holds which states are dynamic, which are baked in, and the baked values that decide
/// whether a dynamic state is needed at all when drawing.
#[derive(Debug)]
pub struct GraphicsPipelineState {
    handle: ash::vk::Pipeline,

    vertex_input_state: Option<VertexInputState>,
    input_assembly_state: Option<InputAssemblyState>,
    tessellation_state: Option<TessellationState>,
    viewport_state: Option<ViewportState>,
    rasterization_state: Option<RasterizationState>,
    multisample_state: Option<MultisampleState>,
    depth_stencil_state: Option<DepthStencilState>,
    color_blend_state: Option<ColorBlendState>,
    discard_rectangle_state: Option<DiscardRectangleState>,
    fragment_shading_rate_state: Option<FragmentShadingRateState>,
    pre_rasterization_topology: Option<PrimitiveTopology>,

    dynamic_state: DynamicStates,
    static_state: DynamicStates,
}

impl GraphicsPipelineState {
    /// Describes the graphics pipeline `handle`, which was created on `device` with
    /// `create_info`.
    pub fn new(
        device: &Device,
        handle: ash::vk::Pipeline,
        create_info: GraphicsPipelineCreateInfo,
    ) -> Result<Arc<GraphicsPipelineState>, Box<ValidationError>> {
        create_info
            .validate(device)
            .map_err(|err| err.add_context("create_info"))?;

        Ok(Arc::new(Self::new_unchecked(handle, create_info)))
    }

    /// Describes a graphics pipeline without checking `create_info` against the device.
    pub fn new_unchecked(
        handle: ash::vk::Pipeline,
        create_info: GraphicsPipelineCreateInfo,
    ) -> Self {
        let static_state = DynamicStates::all()
            .difference(create_info.dynamic_state)
            .into_iter()
            .filter(|state| create_info.has_state_group(state.group()))
            .collect();

        let GraphicsPipelineCreateInfo {
            vertex_input_state,
            input_assembly_state,
            tessellation_state,
            viewport_state,
            rasterization_state,
            multisample_state,
            depth_stencil_state,
            color_blend_state,
            discard_rectangle_state,
            fragment_shading_rate_state,
            pre_rasterization_topology,
            dynamic_state,
            _ne: _,
        } = create_info;

        GraphicsPipelineState {
            handle,
            vertex_input_state,
            input_assembly_state,
            tessellation_state,
            viewport_state,
            rasterization_state,
            multisample_state,
            depth_stencil_state,
            color_blend_state,
            discard_rectangle_state,
            fragment_shading_rate_state,
            pre_rasterization_topology,
            dynamic_state,
            static_state,
        }
    }

    /// Returns the handle of the pipeline.
    #[inline]
    pub fn handle(&self) -> ash::vk::Pipeline {
        self.handle
    }

    /// Returns the states that the pipeline leaves to the command buffer.
    #[inline]
    pub fn dynamic_state(&self) -> DynamicStates {
        self.dynamic_state
    }

    /// Returns the states that the pipeline bakes in. Binding the pipeline overwrites them.
    ///
    /// This never intersects [`dynamic_state`](Self::dynamic_state).
    #[inline]
    pub fn static_state(&self) -> DynamicStates {
        self.static_state
    }

    /// Returns whether `state` is dynamic in this pipeline.
    #[inline]
    pub fn is_dynamic(&self, state: DynamicState) -> bool {
        self.dynamic_state.contains_enum(state)
    }

    /// Returns the vertex input state used to create this pipeline.
    #[inline]
    pub fn vertex_input_state(&self) -> Option<&VertexInputState> {
        self.vertex_input_state.as_ref()
    }

    /// Returns the input assembly state used to create this pipeline.
    #[inline]
    pub fn input_assembly_state(&self) -> Option<&InputAssemblyState> {
        self.input_assembly_state.as_ref()
    }

    /// Returns the tessellation state used to create this pipeline.
    #[inline]
    pub fn tessellation_state(&self) -> Option<&TessellationState> {
        self.tessellation_state.as_ref()
    }

    /// Returns the viewport state used to create this pipeline.
    #[inline]
    pub fn viewport_state(&self) -> Option<&ViewportState> {
        self.viewport_state.as_ref()
    }

    /// Returns the rasterization state used to create this pipeline.
    #[inline]
    pub fn rasterization_state(&self) -> Option<&RasterizationState> {
        self.rasterization_state.as_ref()
    }

    /// Returns the multisample state used to create this pipeline.
    #[inline]
    pub fn multisample_state(&self) -> Option<&MultisampleState> {
        self.multisample_state.as_ref()
    }

    /// Returns the depth/stencil state used to create this pipeline.
    #[inline]
    pub fn depth_stencil_state(&self) -> Option<&DepthStencilState> {
        self.depth_stencil_state.as_ref()
    }

    /// Returns the color blend state used to create this pipeline.
    #[inline]
    pub fn color_blend_state(&self) -> Option<&ColorBlendState> {
        self.color_blend_state.as_ref()
    }

    /// Returns the discard rectangle state used to create this pipeline.
    #[inline]
    pub fn discard_rectangle_state(&self) -> Option<&DiscardRectangleState> {
        self.discard_rectangle_state.as_ref()
    }

    /// Returns the fragment shading rate state used to create this pipeline.
    #[inline]
    pub fn fragment_shading_rate_state(&self) -> Option<&FragmentShadingRateState> {
        self.fragment_shading_rate_state.as_ref()
    }

    /// Returns whether rasterizer discard is baked into the pipeline as enabled.
    #[inline]
    pub fn rasterizer_discard_statically_enabled(&self) -> bool {
        !self.is_dynamic(DynamicState::RasterizerDiscardEnable)
            && self
                .rasterization_state
                .as_ref()
                .is_some_and(|state| state.rasterizer_discard_enable)
    }

    /// Returns whether the pipeline was created with depth bias enabled.
    #[inline]
    pub fn depth_bias_enable(&self) -> bool {
        self.rasterization_state
            .as_ref()
            .is_some_and(RasterizationState::depth_bias_enable)
    }

    /// Returns whether the pipeline was created with stippled lines enabled.
    #[inline]
    pub fn stippled_line_enable(&self) -> bool {
        self.rasterization_state
            .as_ref()
            .is_some_and(RasterizationState::stippled_line_enable)
    }

    /// Returns whether the pipeline was created with the depth bounds test enabled.
    #[inline]
    pub fn depth_bounds_test_enable(&self) -> bool {
        self.depth_stencil_state
            .as_ref()
            .is_some_and(DepthStencilState::depth_bounds_test_enable)
    }

    /// Returns whether the pipeline was created with the stencil test enabled.
    #[inline]
    pub fn stencil_test_enable(&self) -> bool {
        self.depth_stencil_state
            .as_ref()
            .is_some_and(DepthStencilState::stencil_test_enable)
    }

    /// Returns whether at least one enabled blend equation of the pipeline reads the blend
    /// constants.
    #[inline]
    pub fn uses_blend_constants(&self) -> bool {
        self.color_blend_state
            .as_ref()
            .is_some_and(|state| state.uses_blend_constants(self.dynamic_state))
    }

    /// Returns the number of color blend attachments of the pipeline.
    #[inline]
    pub fn color_attachment_count(&self) -> u32 {
        self.color_blend_state
            .as_ref()
            .map_or(0, |state| state.attachments.len() as u32)
    }

    /// Returns the number of viewports fixed by the pipeline.
    #[inline]
    pub fn viewport_count(&self) -> u32 {
        self.viewport_state
            .as_ref()
            .map_or(0, ViewportState::viewport_count)
    }

    /// Returns the number of scissors fixed by the pipeline.
    #[inline]
    pub fn scissor_count(&self) -> u32 {
        self.viewport_state
            .as_ref()
            .map_or(0, ViewportState::scissor_count)
    }

    /// Returns the number of discard rectangles fixed by the pipeline.
    #[inline]
    pub fn discard_rectangle_count(&self) -> u32 {
        self.discard_rectangle_state
            .as_ref()
            .map_or(0, DiscardRectangleState::rectangle_count)
    }

    /// Returns the topology the pipeline was created with.
    #[inline]
    pub fn topology(&self) -> PrimitiveTopology {
        self.input_assembly_state
            .as_ref()
            .map_or(PrimitiveTopology::default(), |state| state.topology)
    }

    /// Returns the topology of the primitives that reach the rasterizer.
    ///
    /// This is, in order of preference: the topology output by a tessellation or geometry
    /// shader, the topology that was last set on the command buffer if the topology is dynamic,
    /// and the topology the pipeline was created with.
    pub fn effective_topology(
        &self,
        recorded: Option<ash::vk::PrimitiveTopology>,
    ) -> ash::vk::PrimitiveTopology {
        if let Some(topology) = self.pre_rasterization_topology {
            return topology.into();
        }

        match recorded {
            Some(topology) if self.is_dynamic(DynamicState::PrimitiveTopology) => topology,
            _ => self.topology().into(),
        }
    }
}
