//! The catalogue of dynamic states.
//!
//! Every piece of graphics pipeline state that can be left out of a pipeline and supplied by a
//! command instead has exactly one [`DynamicState`] variant. The variants are ordered, and the
//! ordinal of a variant is its bit in [`DynamicStates`], so that presence checks across the whole
//! catalogue are plain set operations.

use crate::macros::dynamic_states;

dynamic_states! {
    /// A particular state value within a graphics pipeline that can be dynamically set by a
    /// command buffer.
    DynamicState,

    /// A set of [`DynamicState`] values.
    DynamicStates(u128);

    /// The viewports, set by index. The number of viewports is fixed by the pipeline.
    Viewport = VIEWPORT {
        group: Viewport,
        command: "vkCmdSetViewport",
    },

    /// The scissor rectangles, set by index. The number of scissors is fixed by the pipeline.
    Scissor = SCISSOR {
        group: Viewport,
        command: "vkCmdSetScissor",
    },

    LineWidth = LINE_WIDTH {
        group: Rasterization,
        command: "vkCmdSetLineWidth",
    },

    /// The depth bias factors. Only used when depth bias is enabled.
    DepthBias = DEPTH_BIAS {
        group: Rasterization,
        command: "vkCmdSetDepthBias",
    },

    BlendConstants = BLEND_CONSTANTS {
        group: ColorBlend,
        command: "vkCmdSetBlendConstants",
    },

    DepthBounds = DEPTH_BOUNDS {
        group: DepthStencil,
        command: "vkCmdSetDepthBounds",
    },

    StencilCompareMask = STENCIL_COMPARE_MASK {
        group: DepthStencil,
        command: "vkCmdSetStencilCompareMask",
    },

    StencilWriteMask = STENCIL_WRITE_MASK {
        group: DepthStencil,
        command: "vkCmdSetStencilWriteMask",
    },

    StencilReference = STENCIL_REFERENCE {
        group: DepthStencil,
        command: "vkCmdSetStencilReference",
    },

    CullMode = CULL_MODE {
        group: Rasterization,
        command: "vkCmdSetCullMode",
        vuids: [
            "VUID-vkCmdSetCullMode-None-08971",
        ],
        RequiresOneOf([
            RequiresAllOf([APIVersion(V1_3)]),
            RequiresAllOf([DeviceFeature(extended_dynamic_state)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    FrontFace = FRONT_FACE {
        group: Rasterization,
        command: "vkCmdSetFrontFace",
        vuids: [
            "VUID-vkCmdSetFrontFace-None-08971",
        ],
        RequiresOneOf([
            RequiresAllOf([APIVersion(V1_3)]),
            RequiresAllOf([DeviceFeature(extended_dynamic_state)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    PrimitiveTopology = PRIMITIVE_TOPOLOGY {
        group: InputAssembly,
        command: "vkCmdSetPrimitiveTopology",
        vuids: [
            "VUID-vkCmdSetPrimitiveTopology-None-08971",
        ],
        RequiresOneOf([
            RequiresAllOf([APIVersion(V1_3)]),
            RequiresAllOf([DeviceFeature(extended_dynamic_state)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    /// The number of viewports together with their values. Replaces `Viewport`.
    ViewportWithCount = VIEWPORT_WITH_COUNT {
        group: Viewport,
        command: "vkCmdSetViewportWithCount",
        vuids: [
            "VUID-vkCmdSetViewportWithCount-None-08971",
        ],
        RequiresOneOf([
            RequiresAllOf([APIVersion(V1_3)]),
            RequiresAllOf([DeviceFeature(extended_dynamic_state)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    /// The number of scissors together with their values. Replaces `Scissor`.
    ScissorWithCount = SCISSOR_WITH_COUNT {
        group: Viewport,
        command: "vkCmdSetScissorWithCount",
        vuids: [
            "VUID-vkCmdSetScissorWithCount-None-08971",
        ],
        RequiresOneOf([
            RequiresAllOf([APIVersion(V1_3)]),
            RequiresAllOf([DeviceFeature(extended_dynamic_state)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    /// The vertex buffer strides, set while binding vertex buffers.
    VertexInputBindingStride = VERTEX_INPUT_BINDING_STRIDE {
        group: VertexInput,
        command: "vkCmdBindVertexBuffers2",
        vuids: [],
        RequiresOneOf([
            RequiresAllOf([APIVersion(V1_3)]),
            RequiresAllOf([DeviceFeature(extended_dynamic_state)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    DepthTestEnable = DEPTH_TEST_ENABLE {
        group: DepthStencil,
        command: "vkCmdSetDepthTestEnable",
        vuids: [
            "VUID-vkCmdSetDepthTestEnable-None-08971",
        ],
        RequiresOneOf([
            RequiresAllOf([APIVersion(V1_3)]),
            RequiresAllOf([DeviceFeature(extended_dynamic_state)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    DepthWriteEnable = DEPTH_WRITE_ENABLE {
        group: DepthStencil,
        command: "vkCmdSetDepthWriteEnable",
        vuids: [
            "VUID-vkCmdSetDepthWriteEnable-None-08971",
        ],
        RequiresOneOf([
            RequiresAllOf([APIVersion(V1_3)]),
            RequiresAllOf([DeviceFeature(extended_dynamic_state)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    DepthCompareOp = DEPTH_COMPARE_OP {
        group: DepthStencil,
        command: "vkCmdSetDepthCompareOp",
        vuids: [
            "VUID-vkCmdSetDepthCompareOp-None-08971",
        ],
        RequiresOneOf([
            RequiresAllOf([APIVersion(V1_3)]),
            RequiresAllOf([DeviceFeature(extended_dynamic_state)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    DepthBoundsTestEnable = DEPTH_BOUNDS_TEST_ENABLE {
        group: DepthStencil,
        command: "vkCmdSetDepthBoundsTestEnable",
        vuids: [
            "VUID-vkCmdSetDepthBoundsTestEnable-None-08971",
        ],
        RequiresOneOf([
            RequiresAllOf([APIVersion(V1_3)]),
            RequiresAllOf([DeviceFeature(extended_dynamic_state)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    StencilTestEnable = STENCIL_TEST_ENABLE {
        group: DepthStencil,
        command: "vkCmdSetStencilTestEnable",
        vuids: [
            "VUID-vkCmdSetStencilTestEnable-None-08971",
        ],
        RequiresOneOf([
            RequiresAllOf([APIVersion(V1_3)]),
            RequiresAllOf([DeviceFeature(extended_dynamic_state)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    StencilOp = STENCIL_OP {
        group: DepthStencil,
        command: "vkCmdSetStencilOp",
        vuids: [
            "VUID-vkCmdSetStencilOp-None-08971",
        ],
        RequiresOneOf([
            RequiresAllOf([APIVersion(V1_3)]),
            RequiresAllOf([DeviceFeature(extended_dynamic_state)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    RasterizerDiscardEnable = RASTERIZER_DISCARD_ENABLE {
        group: Rasterization,
        command: "vkCmdSetRasterizerDiscardEnable",
        vuids: [
            "VUID-vkCmdSetRasterizerDiscardEnable-None-08970",
        ],
        RequiresOneOf([
            RequiresAllOf([APIVersion(V1_3)]),
            RequiresAllOf([DeviceFeature(extended_dynamic_state2)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    DepthBiasEnable = DEPTH_BIAS_ENABLE {
        group: Rasterization,
        command: "vkCmdSetDepthBiasEnable",
        vuids: [
            "VUID-vkCmdSetDepthBiasEnable-None-08970",
        ],
        RequiresOneOf([
            RequiresAllOf([APIVersion(V1_3)]),
            RequiresAllOf([DeviceFeature(extended_dynamic_state2)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    PrimitiveRestartEnable = PRIMITIVE_RESTART_ENABLE {
        group: InputAssembly,
        command: "vkCmdSetPrimitiveRestartEnable",
        vuids: [
            "VUID-vkCmdSetPrimitiveRestartEnable-None-08970",
        ],
        RequiresOneOf([
            RequiresAllOf([APIVersion(V1_3)]),
            RequiresAllOf([DeviceFeature(extended_dynamic_state2)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    ViewportWScaling = VIEWPORT_W_SCALING_NV {
        group: Viewport,
        command: "vkCmdSetViewportWScalingNV",
        vuids: [],
        RequiresOneOf([
            RequiresAllOf([DeviceExtension(nv_clip_space_w_scaling)]),
        ]),
    },

    DiscardRectangle = DISCARD_RECTANGLE_EXT {
        group: DiscardRectangle,
        command: "vkCmdSetDiscardRectangleEXT",
        vuids: [],
        RequiresOneOf([
            RequiresAllOf([DeviceExtension(ext_discard_rectangles)]),
        ]),
    },

    DiscardRectangleEnable = DISCARD_RECTANGLE_ENABLE_EXT {
        group: DiscardRectangle,
        command: "vkCmdSetDiscardRectangleEnableEXT",
        vuids: [
            "VUID-vkCmdSetDiscardRectangleEnableEXT-specVersion-07851",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceExtension(ext_discard_rectangles)]),
        ]),
    },

    DiscardRectangleMode = DISCARD_RECTANGLE_MODE_EXT {
        group: DiscardRectangle,
        command: "vkCmdSetDiscardRectangleModeEXT",
        vuids: [
            "VUID-vkCmdSetDiscardRectangleModeEXT-specVersion-07852",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceExtension(ext_discard_rectangles)]),
        ]),
    },

    SampleLocations = SAMPLE_LOCATIONS_EXT {
        group: Multisample,
        command: "vkCmdSetSampleLocationsEXT",
        vuids: [],
        RequiresOneOf([
            RequiresAllOf([DeviceExtension(ext_sample_locations)]),
        ]),
    },

    /// Only valid on ray tracing pipelines.
    RayTracingPipelineStackSize = RAY_TRACING_PIPELINE_STACK_SIZE_KHR {
        group: RayTracing,
        command: "vkCmdSetRayTracingPipelineStackSizeKHR",
        vuids: [],
        RequiresOneOf([
            RequiresAllOf([DeviceExtension(khr_ray_tracing_pipeline)]),
        ]),
    },

    ViewportShadingRatePalette = VIEWPORT_SHADING_RATE_PALETTE_NV {
        group: Viewport,
        command: "vkCmdSetViewportShadingRatePaletteNV",
        vuids: [
            "VUID-vkCmdSetViewportShadingRatePaletteNV-None-02064",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(shading_rate_image)]),
        ]),
    },

    ViewportCoarseSampleOrder = VIEWPORT_COARSE_SAMPLE_ORDER_NV {
        group: Viewport,
        command: "vkCmdSetCoarseSampleOrderNV",
        vuids: [],
        RequiresOneOf([
            RequiresAllOf([DeviceExtension(nv_shading_rate_image)]),
        ]),
    },

    ExclusiveScissorEnable = EXCLUSIVE_SCISSOR_ENABLE_NV {
        group: Viewport,
        command: "vkCmdSetExclusiveScissorEnableNV",
        vuids: [
            "VUID-vkCmdSetExclusiveScissorEnableNV-exclusiveScissor-07853",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(exclusive_scissor)]),
        ]),
    },

    ExclusiveScissor = EXCLUSIVE_SCISSOR_NV {
        group: Viewport,
        command: "vkCmdSetExclusiveScissorNV",
        vuids: [
            "VUID-vkCmdSetExclusiveScissorNV-None-02031",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(exclusive_scissor)]),
        ]),
    },

    FragmentShadingRate = FRAGMENT_SHADING_RATE_KHR {
        group: FragmentShadingRate,
        command: "vkCmdSetFragmentShadingRateKHR",
        vuids: [
            "VUID-vkCmdSetFragmentShadingRateKHR-pipelineFragmentShadingRate-04509",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(pipeline_fragment_shading_rate)]),
        ]),
    },

    /// The line stipple factor and pattern. Only used when stippled lines are enabled.
    LineStipple = LINE_STIPPLE_EXT {
        group: Rasterization,
        command: "vkCmdSetLineStippleEXT",
        vuids: [],
        RequiresOneOf([
            RequiresAllOf([DeviceExtension(ext_line_rasterization)]),
            RequiresAllOf([DeviceExtension(khr_line_rasterization)]),
        ]),
    },

    /// The whole vertex input state, including bindings and attributes.
    VertexInput = VERTEX_INPUT_EXT {
        group: VertexInput,
        command: "vkCmdSetVertexInputEXT",
        vuids: [
            "VUID-vkCmdSetVertexInputEXT-None-08546",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(vertex_input_dynamic_state)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    PatchControlPoints = PATCH_CONTROL_POINTS_EXT {
        group: Tessellation,
        command: "vkCmdSetPatchControlPointsEXT",
        vuids: [
            "VUID-vkCmdSetPatchControlPointsEXT-None-09422",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state2_patch_control_points)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    LogicOp = LOGIC_OP_EXT {
        group: ColorBlend,
        command: "vkCmdSetLogicOpEXT",
        vuids: [
            "VUID-vkCmdSetLogicOpEXT-None-09422",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state2_logic_op)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    /// A per-attachment switch that disables writes to the attachment.
    ColorWriteEnable = COLOR_WRITE_ENABLE_EXT {
        group: ColorBlend,
        command: "vkCmdSetColorWriteEnableEXT",
        vuids: [
            "VUID-vkCmdSetColorWriteEnableEXT-None-04803",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(color_write_enable)]),
        ]),
    },

    TessellationDomainOrigin = TESSELLATION_DOMAIN_ORIGIN_EXT {
        group: Tessellation,
        command: "vkCmdSetTessellationDomainOriginEXT",
        vuids: [
            "VUID-vkCmdSetTessellationDomainOriginEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_tessellation_domain_origin)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    DepthClampEnable = DEPTH_CLAMP_ENABLE_EXT {
        group: Rasterization,
        command: "vkCmdSetDepthClampEnableEXT",
        vuids: [
            "VUID-vkCmdSetDepthClampEnableEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_depth_clamp_enable)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    PolygonMode = POLYGON_MODE_EXT {
        group: Rasterization,
        command: "vkCmdSetPolygonModeEXT",
        vuids: [
            "VUID-vkCmdSetPolygonModeEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_polygon_mode)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    RasterizationSamples = RASTERIZATION_SAMPLES_EXT {
        group: Multisample,
        command: "vkCmdSetRasterizationSamplesEXT",
        vuids: [
            "VUID-vkCmdSetRasterizationSamplesEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_rasterization_samples)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    SampleMask = SAMPLE_MASK_EXT {
        group: Multisample,
        command: "vkCmdSetSampleMaskEXT",
        vuids: [
            "VUID-vkCmdSetSampleMaskEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_sample_mask)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    AlphaToCoverageEnable = ALPHA_TO_COVERAGE_ENABLE_EXT {
        group: Multisample,
        command: "vkCmdSetAlphaToCoverageEnableEXT",
        vuids: [
            "VUID-vkCmdSetAlphaToCoverageEnableEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_alpha_to_coverage_enable)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    AlphaToOneEnable = ALPHA_TO_ONE_ENABLE_EXT {
        group: Multisample,
        command: "vkCmdSetAlphaToOneEnableEXT",
        vuids: [
            "VUID-vkCmdSetAlphaToOneEnableEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_alpha_to_one_enable)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    LogicOpEnable = LOGIC_OP_ENABLE_EXT {
        group: ColorBlend,
        command: "vkCmdSetLogicOpEnableEXT",
        vuids: [
            "VUID-vkCmdSetLogicOpEnableEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_logic_op_enable)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    /// Per attachment.
    ColorBlendEnable = COLOR_BLEND_ENABLE_EXT {
        group: ColorBlend,
        command: "vkCmdSetColorBlendEnableEXT",
        vuids: [
            "VUID-vkCmdSetColorBlendEnableEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_color_blend_enable)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    /// Per attachment.
    ColorBlendEquation = COLOR_BLEND_EQUATION_EXT {
        group: ColorBlend,
        command: "vkCmdSetColorBlendEquationEXT",
        vuids: [
            "VUID-vkCmdSetColorBlendEquationEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_color_blend_equation)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    /// Per attachment.
    ColorWriteMask = COLOR_WRITE_MASK_EXT {
        group: ColorBlend,
        command: "vkCmdSetColorWriteMaskEXT",
        vuids: [
            "VUID-vkCmdSetColorWriteMaskEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_color_write_mask)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    RasterizationStream = RASTERIZATION_STREAM_EXT {
        group: Rasterization,
        command: "vkCmdSetRasterizationStreamEXT",
        vuids: [
            "VUID-vkCmdSetRasterizationStreamEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_rasterization_stream)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    ConservativeRasterizationMode = CONSERVATIVE_RASTERIZATION_MODE_EXT {
        group: Rasterization,
        command: "vkCmdSetConservativeRasterizationModeEXT",
        vuids: [
            "VUID-vkCmdSetConservativeRasterizationModeEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_conservative_rasterization_mode)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    ExtraPrimitiveOverestimationSize = EXTRA_PRIMITIVE_OVERESTIMATION_SIZE_EXT {
        group: Rasterization,
        command: "vkCmdSetExtraPrimitiveOverestimationSizeEXT",
        vuids: [
            "VUID-vkCmdSetExtraPrimitiveOverestimationSizeEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_extra_primitive_overestimation_size)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    DepthClipEnable = DEPTH_CLIP_ENABLE_EXT {
        group: Rasterization,
        command: "vkCmdSetDepthClipEnableEXT",
        vuids: [
            "VUID-vkCmdSetDepthClipEnableEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_depth_clip_enable)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    SampleLocationsEnable = SAMPLE_LOCATIONS_ENABLE_EXT {
        group: Multisample,
        command: "vkCmdSetSampleLocationsEnableEXT",
        vuids: [
            "VUID-vkCmdSetSampleLocationsEnableEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_sample_locations_enable)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    /// Per attachment.
    ColorBlendAdvanced = COLOR_BLEND_ADVANCED_EXT {
        group: ColorBlend,
        command: "vkCmdSetColorBlendAdvancedEXT",
        vuids: [
            "VUID-vkCmdSetColorBlendAdvancedEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_color_blend_advanced)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    ProvokingVertexMode = PROVOKING_VERTEX_MODE_EXT {
        group: Rasterization,
        command: "vkCmdSetProvokingVertexModeEXT",
        vuids: [
            "VUID-vkCmdSetProvokingVertexModeEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_provoking_vertex_mode)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    LineRasterizationMode = LINE_RASTERIZATION_MODE_EXT {
        group: Rasterization,
        command: "vkCmdSetLineRasterizationModeEXT",
        vuids: [
            "VUID-vkCmdSetLineRasterizationModeEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_line_rasterization_mode)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    LineStippleEnable = LINE_STIPPLE_ENABLE_EXT {
        group: Rasterization,
        command: "vkCmdSetLineStippleEnableEXT",
        vuids: [
            "VUID-vkCmdSetLineStippleEnableEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_line_stipple_enable)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    DepthClipNegativeOneToOne = DEPTH_CLIP_NEGATIVE_ONE_TO_ONE_EXT {
        group: Viewport,
        command: "vkCmdSetDepthClipNegativeOneToOneEXT",
        vuids: [
            "VUID-vkCmdSetDepthClipNegativeOneToOneEXT-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_depth_clip_negative_one_to_one)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    ViewportWScalingEnable = VIEWPORT_W_SCALING_ENABLE_NV {
        group: Viewport,
        command: "vkCmdSetViewportWScalingEnableNV",
        vuids: [
            "VUID-vkCmdSetViewportWScalingEnableNV-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_viewport_w_scaling_enable)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    ViewportSwizzle = VIEWPORT_SWIZZLE_NV {
        group: Viewport,
        command: "vkCmdSetViewportSwizzleNV",
        vuids: [
            "VUID-vkCmdSetViewportSwizzleNV-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_viewport_swizzle)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    CoverageToColorEnable = COVERAGE_TO_COLOR_ENABLE_NV {
        group: Multisample,
        command: "vkCmdSetCoverageToColorEnableNV",
        vuids: [
            "VUID-vkCmdSetCoverageToColorEnableNV-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_coverage_to_color_enable)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    CoverageToColorLocation = COVERAGE_TO_COLOR_LOCATION_NV {
        group: Multisample,
        command: "vkCmdSetCoverageToColorLocationNV",
        vuids: [
            "VUID-vkCmdSetCoverageToColorLocationNV-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_coverage_to_color_location)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    CoverageModulationMode = COVERAGE_MODULATION_MODE_NV {
        group: Multisample,
        command: "vkCmdSetCoverageModulationModeNV",
        vuids: [
            "VUID-vkCmdSetCoverageModulationModeNV-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_coverage_modulation_mode)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    CoverageModulationTableEnable = COVERAGE_MODULATION_TABLE_ENABLE_NV {
        group: Multisample,
        command: "vkCmdSetCoverageModulationTableEnableNV",
        vuids: [
            "VUID-vkCmdSetCoverageModulationTableEnableNV-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_coverage_modulation_table_enable)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    CoverageModulationTable = COVERAGE_MODULATION_TABLE_NV {
        group: Multisample,
        command: "vkCmdSetCoverageModulationTableNV",
        vuids: [
            "VUID-vkCmdSetCoverageModulationTableNV-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_coverage_modulation_table)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    ShadingRateImageEnable = SHADING_RATE_IMAGE_ENABLE_NV {
        group: Viewport,
        command: "vkCmdSetShadingRateImageEnableNV",
        vuids: [
            "VUID-vkCmdSetShadingRateImageEnableNV-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_shading_rate_image_enable)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    RepresentativeFragmentTestEnable = REPRESENTATIVE_FRAGMENT_TEST_ENABLE_NV {
        group: Multisample,
        command: "vkCmdSetRepresentativeFragmentTestEnableNV",
        vuids: [
            "VUID-vkCmdSetRepresentativeFragmentTestEnableNV-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_representative_fragment_test_enable)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    CoverageReductionMode = COVERAGE_REDUCTION_MODE_NV {
        group: Multisample,
        command: "vkCmdSetCoverageReductionModeNV",
        vuids: [
            "VUID-vkCmdSetCoverageReductionModeNV-None-09423",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(extended_dynamic_state3_coverage_reduction_mode)]),
            RequiresAllOf([DeviceFeature(shader_object)]),
        ]),
    },

    /// The aspects of attachments that may be read while being written.
    AttachmentFeedbackLoopEnable = ATTACHMENT_FEEDBACK_LOOP_ENABLE_EXT {
        group: ColorBlend,
        command: "vkCmdSetAttachmentFeedbackLoopEnableEXT",
        vuids: [
            "VUID-vkCmdSetAttachmentFeedbackLoopEnableEXT-attachmentFeedbackLoopDynamicState-08862",
        ],
        RequiresOneOf([
            RequiresAllOf([DeviceFeature(attachment_feedback_loop_dynamic_state)]),
        ]),
    },
}

#[cfg(test)]
mod tests {
    use super::{DynamicState, DynamicStates};
    use crate::{
        device::{DeviceExtensions, DeviceFeatures},
        pipeline::StateGroup,
        Requires, Version,
    };

    #[test]
    fn fits_in_bitset() {
        assert!(DynamicState::COUNT <= 128);
        assert_eq!(DynamicStates::all().count() as usize, DynamicState::COUNT);

        for (ordinal, &state) in DynamicState::ALL.iter().enumerate() {
            assert_eq!(state.ordinal(), ordinal);
            assert_eq!(DynamicState::from_ordinal(ordinal), Some(state));
        }

        assert_eq!(DynamicState::from_ordinal(DynamicState::COUNT), None);
    }

    #[test]
    fn ffi_round_trip() {
        for &state in DynamicState::ALL {
            let ffi = ash::vk::DynamicState::from(state);
            assert_eq!(DynamicState::try_from(ffi), Ok(state));
        }

        assert!(DynamicState::try_from(ash::vk::DynamicState::from_raw(i32::MAX)).is_err());
    }

    #[test]
    fn metadata() {
        assert_eq!(DynamicState::LineWidth.name(), "VK_DYNAMIC_STATE_LINE_WIDTH");
        assert_eq!(
            DynamicState::ColorBlendEnable.name(),
            "VK_DYNAMIC_STATE_COLOR_BLEND_ENABLE_EXT",
        );
        assert_eq!(DynamicState::StencilOp.set_command(), "vkCmdSetStencilOp");
        assert_eq!(DynamicState::StencilOp.group(), StateGroup::DepthStencil);
        assert_eq!(
            DynamicState::CullMode.set_command_vuids(),
            &["VUID-vkCmdSetCullMode-None-08971"],
        );
        assert!(DynamicState::Viewport.set_command_vuids().is_empty());
        assert!(DynamicState::Viewport.requires_one_of().is_empty());

        let requires_one_of = DynamicState::PolygonMode.requires_one_of();
        assert_eq!(requires_one_of.len(), 2);
        assert_eq!(
            requires_one_of.0[0].0,
            &[Requires::DeviceFeature(
                "extended_dynamic_state3_polygon_mode"
            )],
        );
    }

    #[test]
    fn support() {
        let features = DeviceFeatures::empty();
        let extensions = DeviceExtensions::empty();

        assert!(DynamicState::Scissor.is_supported_by(Version::V1_0, &features, &extensions));
        assert!(!DynamicState::CullMode.is_supported_by(Version::V1_2, &features, &extensions));
        assert!(DynamicState::CullMode.is_supported_by(Version::V1_3, &features, &extensions));
        assert!(!DynamicState::PolygonMode.is_supported_by(Version::V1_3, &features, &extensions));

        let features = DeviceFeatures {
            shader_object: true,
            ..DeviceFeatures::empty()
        };
        assert!(DynamicState::PolygonMode.is_supported_by(Version::V1_0, &features, &extensions));
        assert!(DynamicState::CullMode.is_supported_by(Version::V1_0, &features, &extensions));
        assert!(!DynamicState::DiscardRectangle.is_supported_by(
            Version::V1_3,
            &features,
            &extensions,
        ));
    }

    #[test]
    fn set_algebra() {
        let a: DynamicStates = [DynamicState::Viewport, DynamicState::Scissor]
            .into_iter()
            .collect();
        let b = DynamicStates::empty()
            .with(DynamicState::Scissor)
            .with(DynamicState::LineWidth);

        assert_eq!(
            (a & b).into_iter().collect::<Vec<_>>(),
            [DynamicState::Scissor],
        );
        assert_eq!(
            (a ^ b).into_iter().collect::<Vec<_>>(),
            [DynamicState::Viewport, DynamicState::LineWidth],
        );
        assert_eq!((a | b).count(), 3);
        assert_eq!(a - b, DynamicStates::from(DynamicState::Viewport));
        assert!(!(!a).intersects(a));
        assert_eq!((!a | a), DynamicStates::all());
        assert!(DynamicStates::all().contains(a));

        let mut c = a;
        c.insert(DynamicState::AttachmentFeedbackLoopEnable);
        assert!(c.contains_enum(DynamicState::AttachmentFeedbackLoopEnable));
        c.remove(DynamicState::Viewport);
        assert!(!c.contains_enum(DynamicState::Viewport));
        assert_eq!(c.into_iter().len(), 2);
    }

    #[test]
    fn debug_lists_names() {
        let states = DynamicStates::empty()
            .with(DynamicState::Scissor)
            .with(DynamicState::Viewport);
        assert_eq!(
            format!("{:?}", states),
            "VK_DYNAMIC_STATE_VIEWPORT | VK_DYNAMIC_STATE_SCISSOR",
        );
        assert_eq!(format!("{:?}", DynamicStates::empty()), "empty()");
    }
}
