//! Configures the area of the framebuffer that you will draw to.
//!
//! There are two different concepts to determine where things will be drawn:
//!
//! - The viewport is the region of the image which corresponds to the vertex coordinates `-1.0`
//!   to `1.0`.
//! - Any primitive outside of the scissor box will be discarded.
//!
//! When the viewports or scissors are dynamic, the pipeline still fixes how many of them there
//! are, unless the count itself is dynamic too. In the latter case, the lists below must be
//! empty.

use crate::{
    device::Device,
    pipeline::{DynamicState, DynamicStates},
    Requires, RequiresAllOf, RequiresOneOf, ValidationError,
};
use smallvec::SmallVec;
use std::ops::RangeInclusive;

/// List of viewports and scissors that are used when creating a graphics pipeline object.
#[derive(Clone, Debug)]
pub struct ViewportState {
    /// Specifies the viewport transforms.
    ///
    /// When [`DynamicState::Viewport`] is used, the values of each viewport are ignored
    /// and must be set dynamically, but the number of viewports is fixed and
    /// must be matched when setting the dynamic value.
    /// When [`DynamicState::ViewportWithCount`] is used, the number of viewports is also dynamic,
    /// and `viewports` must be empty.
    ///
    /// If neither the number of viewports nor the number of scissors is dynamic, then the
    /// number of both must be identical.
    ///
    /// The default value is a single element of `Viewport::default()`.
    pub viewports: SmallVec<[Viewport; 2]>,

    /// Specifies the scissor rectangles.
    ///
    /// When [`DynamicState::Scissor`] is used, the values of each scissor are ignored
    /// and must be set dynamically, but the number of scissors is fixed and
    /// must be matched when setting the dynamic value.
    /// When [`DynamicState::ScissorWithCount`] is used, the number of scissors is also dynamic,
    /// and `scissors` must be empty.
    ///
    /// The default value is a single element of `Scissor::default()`.
    pub scissors: SmallVec<[Scissor; 2]>,

    pub _ne: crate::NonExhaustive,
}

impl Default for ViewportState {
    #[inline]
    fn default() -> Self {
        Self {
            viewports: SmallVec::from_elem(Viewport::default(), 1),
            scissors: SmallVec::from_elem(Scissor::default(), 1),
            _ne: crate::NonExhaustive(()),
        }
    }
}

impl ViewportState {
    /// Returns the number of viewports that the pipeline fixes.
    #[inline]
    pub fn viewport_count(&self) -> u32 {
        self.viewports.len() as u32
    }

    /// Returns the number of scissors that the pipeline fixes.
    #[inline]
    pub fn scissor_count(&self) -> u32 {
        self.scissors.len() as u32
    }

    pub(crate) fn validate(
        &self,
        device: &Device,
        dynamic_state: DynamicStates,
    ) -> Result<(), Box<ValidationError>> {
        let Self {
            viewports,
            scissors,
            _ne: _,
        } = self;

        let viewport_count = viewports.len() as u32;
        let scissor_count = scissors.len() as u32;
        let viewport_with_count = dynamic_state.contains_enum(DynamicState::ViewportWithCount);
        let scissor_with_count = dynamic_state.contains_enum(DynamicState::ScissorWithCount);

        if viewport_with_count {
            if viewport_count != 0 {
                return Err(Box::new(ValidationError {
                    problem: "`DynamicState::ViewportWithCount` is dynamic, but `viewports` is \
                        not empty"
                        .into(),
                    vuids: &["VUID-VkPipelineViewportStateCreateInfo-viewportCount-04135"],
                    ..Default::default()
                }));
            }
        } else if viewport_count == 0 {
            return Err(Box::new(ValidationError {
                context: "viewports".into(),
                problem: "is empty, but `DynamicState::ViewportWithCount` is not dynamic".into(),
                vuids: &["VUID-VkPipelineViewportStateCreateInfo-viewportCount-04135"],
                ..Default::default()
            }));
        }

        if scissor_with_count {
            if scissor_count != 0 {
                return Err(Box::new(ValidationError {
                    problem: "`DynamicState::ScissorWithCount` is dynamic, but `scissors` is \
                        not empty"
                        .into(),
                    vuids: &["VUID-VkPipelineViewportStateCreateInfo-scissorCount-04136"],
                    ..Default::default()
                }));
            }
        } else if scissor_count == 0 {
            return Err(Box::new(ValidationError {
                context: "scissors".into(),
                problem: "is empty, but `DynamicState::ScissorWithCount` is not dynamic".into(),
                vuids: &["VUID-VkPipelineViewportStateCreateInfo-scissorCount-04136"],
                ..Default::default()
            }));
        }

        if !viewport_with_count && !scissor_with_count && viewport_count != scissor_count {
            return Err(Box::new(ValidationError {
                problem: "the length of `viewports` and the length of `scissors` are not equal"
                    .into(),
                vuids: &["VUID-VkPipelineViewportStateCreateInfo-scissorCount-04134"],
                ..Default::default()
            }));
        }

        if !device.enabled_features().multi_viewport {
            if viewport_count > 1 {
                return Err(Box::new(ValidationError {
                    context: "viewports".into(),
                    problem: "the length is greater than 1".into(),
                    requires_one_of: RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceFeature(
                        "multi_viewport",
                    )])]),
                    vuids: &["VUID-VkPipelineViewportStateCreateInfo-viewportCount-01216"],
                }));
            }

            if scissor_count > 1 {
                return Err(Box::new(ValidationError {
                    context: "scissors".into(),
                    problem: "the length is greater than 1".into(),
                    requires_one_of: RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceFeature(
                        "multi_viewport",
                    )])]),
                    vuids: &["VUID-VkPipelineViewportStateCreateInfo-scissorCount-01217"],
                }));
            }
        }

        if let Some(max_viewports) = device.properties().max_viewports {
            if viewport_count > max_viewports {
                return Err(Box::new(ValidationError {
                    context: "viewports".into(),
                    problem: "the length exceeds the `max_viewports` limit".into(),
                    vuids: &["VUID-VkPipelineViewportStateCreateInfo-viewportCount-01218"],
                    ..Default::default()
                }));
            }

            if scissor_count > max_viewports {
                return Err(Box::new(ValidationError {
                    context: "scissors".into(),
                    problem: "the length exceeds the `max_viewports` limit".into(),
                    vuids: &["VUID-VkPipelineViewportStateCreateInfo-scissorCount-01219"],
                    ..Default::default()
                }));
            }
        }

        if !dynamic_state.contains_enum(DynamicState::Viewport) {
            for (index, viewport) in viewports.iter().enumerate() {
                viewport
                    .validate()
                    .map_err(|err| err.add_context(format!("viewports[{}]", index)))?;
            }
        }

        Ok(())
    }
}

/// State of a single viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Coordinates in pixels of the top-left hand corner of the viewport.
    ///
    /// The default value is `[0.0; 2]`.
    pub offset: [f32; 2],

    /// Dimensions in pixels of the viewport.
    ///
    /// The default value is `[1.0; 2]`.
    pub extent: [f32; 2],

    /// Minimum and maximum values of the depth.
    ///
    /// The values `0.0` to `1.0` of each vertex's Z coordinate will be mapped to this
    /// `depth_range` before being compared to the existing depth value.
    ///
    /// This is equivalents to `glDepthRange` in OpenGL, except that OpenGL uses the Z coordinate
    /// range from `-1.0` to `1.0` instead.
    ///
    /// The default value is `0.0..=1.0`.
    pub depth_range: RangeInclusive<f32>,
}

impl Default for Viewport {
    #[inline]
    fn default() -> Self {
        Self {
            offset: [0.0; 2],
            extent: [1.0; 2],
            depth_range: 0.0..=1.0,
        }
    }
}

impl Viewport {
    pub(crate) fn validate(&self) -> Result<(), Box<ValidationError>> {
        let &Self {
            offset: _,
            extent,
            ref depth_range,
        } = self;

        if extent[0] <= 0.0 {
            return Err(Box::new(ValidationError {
                context: "extent[0]".into(),
                problem: "is not greater than zero".into(),
                vuids: &["VUID-VkViewport-width-01770"],
                ..Default::default()
            }));
        }

        if !(0.0..=1.0).contains(depth_range.start()) {
            return Err(Box::new(ValidationError {
                context: "depth_range.start".into(),
                problem: "is not between 0.0 and 1.0 inclusive".into(),
                vuids: &["VUID-VkViewport-minDepth-01234"],
                ..Default::default()
            }));
        }

        if !(0.0..=1.0).contains(depth_range.end()) {
            return Err(Box::new(ValidationError {
                context: "depth_range.end".into(),
                problem: "is not between 0.0 and 1.0 inclusive".into(),
                vuids: &["VUID-VkViewport-maxDepth-01235"],
                ..Default::default()
            }));
        }

        Ok(())
    }
}

/// A two-dimensional subregion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Scissor {
    /// Coordinates of the top-left hand corner of the box.
    ///
    /// The default value is `[0; 2]`.
    pub offset: [u32; 2],

    /// Dimensions of the box.
    ///
    /// The default value is `[i32::MAX; 2]`.
    pub extent: [u32; 2],
}

impl Default for Scissor {
    #[inline]
    fn default() -> Self {
        Self {
            offset: [0; 2],
            extent: [i32::MAX as u32; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Scissor, Viewport, ViewportState};
    use crate::{
        device::{DeviceExtensions, DeviceFeatures},
        pipeline::{DynamicState, DynamicStates},
    };
    use smallvec::{smallvec, SmallVec};

    fn multi_viewport_device() -> std::sync::Arc<crate::device::Device> {
        device!(enabled_features: DeviceFeatures {
            multi_viewport: true,
            ..DeviceFeatures::empty()
        })
    }

    #[test]
    fn counts_must_match() {
        let state = ViewportState {
            viewports: smallvec![Viewport::default(); 2],
            scissors: smallvec![Scissor::default()],
            ..Default::default()
        };

        let err = state
            .validate(&multi_viewport_device(), DynamicStates::empty())
            .unwrap_err();
        assert_eq!(
            err.vuids,
            &["VUID-VkPipelineViewportStateCreateInfo-scissorCount-04134"],
        );
    }

    #[test]
    fn with_count_requires_empty_list() {
        let device = device!(
            enabled_features: DeviceFeatures {
                extended_dynamic_state: true,
                ..DeviceFeatures::empty()
            },
            enabled_extensions: DeviceExtensions {
                ext_extended_dynamic_state: true,
                ..DeviceExtensions::empty()
            },
        );
        let dynamic_state: DynamicStates =
            [DynamicState::ViewportWithCount, DynamicState::Scissor]
                .into_iter()
                .collect();

        let err = ViewportState::default()
            .validate(&device, dynamic_state)
            .unwrap_err();
        assert_eq!(
            err.vuids,
            &["VUID-VkPipelineViewportStateCreateInfo-viewportCount-04135"],
        );

        let state = ViewportState {
            viewports: SmallVec::new(),
            scissors: smallvec![Scissor::default(); 2],
            ..Default::default()
        };
        assert!(state.validate(&device, dynamic_state).is_err());
        assert!(state
            .validate(&multi_viewport_device(), dynamic_state)
            .is_ok());
        assert_eq!(state.viewport_count(), 0);
        assert_eq!(state.scissor_count(), 2);
    }

    #[test]
    fn dynamic_viewport_values_are_ignored() {
        let state = ViewportState {
            viewports: smallvec![Viewport {
                extent: [0.0; 2],
                ..Default::default()
            }],
            ..Default::default()
        };

        assert!(state.validate(&*device!(), DynamicStates::empty()).is_err());
        assert!(state
            .validate(&*device!(), DynamicState::Viewport.into())
            .is_ok());
    }
}
