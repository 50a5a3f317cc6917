//! A test to discard pixels that would be written to certain areas of a framebuffer.
//!
//! The discard rectangle test is similar to, but separate from the scissor test.

use crate::{device::Device, pipeline::graphics::viewport::Scissor, ValidationError};

/// The state in a graphics pipeline describing how the discard rectangle test should behave.
#[derive(Clone, Debug)]
pub struct DiscardRectangleState {
    /// Specifies the discard rectangles.
    ///
    /// With [`DynamicState::DiscardRectangle`](crate::pipeline::DynamicState::DiscardRectangle),
    /// only the number of rectangles is used, and every one of them must be set before drawing.
    ///
    /// The default value is empty.
    pub rectangles: Vec<Scissor>,

    pub _ne: crate::NonExhaustive,
}

impl Default for DiscardRectangleState {
    #[inline]
    fn default() -> Self {
        Self {
            rectangles: Vec::new(),
            _ne: crate::NonExhaustive(()),
        }
    }
}

impl DiscardRectangleState {
    /// Returns the number of discard rectangles that the pipeline fixes.
    #[inline]
    pub fn rectangle_count(&self) -> u32 {
        self.rectangles.len() as u32
    }

    pub(crate) fn validate(&self, device: &Device) -> Result<(), Box<ValidationError>> {
        let &Self {
            ref rectangles,
            _ne: _,
        } = self;

        if let Some(max_discard_rectangles) = device.properties().max_discard_rectangles {
            if rectangles.len() > max_discard_rectangles as usize {
                return Err(Box::new(ValidationError {
                    context: "rectangles".into(),
                    problem: "the length exceeds the `max_discard_rectangles` limit".into(),
                    vuids: &[
                        "VUID-VkPipelineDiscardRectangleStateCreateInfoEXT-discardRectangleCount-00582",
                    ],
                    ..Default::default()
                }));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::DiscardRectangleState;
    use crate::{
        device::{DeviceExtensions, DeviceProperties},
        pipeline::graphics::viewport::Scissor,
    };

    #[test]
    fn limited_by_device() {
        let device = device!(
            enabled_extensions: DeviceExtensions {
                ext_discard_rectangles: true,
                ..DeviceExtensions::empty()
            },
            properties: DeviceProperties {
                max_discard_rectangles: Some(2),
                ..Default::default()
            },
        );
        let mut state = DiscardRectangleState {
            rectangles: vec![Scissor::default(); 2],
            ..Default::default()
        };
        assert_eq!(state.rectangle_count(), 2);
        assert!(state.validate(&device).is_ok());

        state.rectangles.push(Scissor::default());
        assert!(state.validate(&device).is_err());
    }
}
