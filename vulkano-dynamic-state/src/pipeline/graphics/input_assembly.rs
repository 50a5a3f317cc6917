//! Configures how input vertices are assembled into primitives.

use crate::{
    device::Device,
    macros::vulkan_enum,
    pipeline::{DynamicState, DynamicStates},
    Requires, RequiresAllOf, RequiresOneOf, ValidationError,
};

/// The state in a graphics pipeline describing how the input assembly stage should behave.
#[derive(Clone, Copy, Debug)]
pub struct InputAssemblyState {
    /// The type of primitives.
    ///
    /// If [`DynamicState::PrimitiveTopology`] is dynamic, this is the topology that dynamically
    /// set topologies are compared against, unless the device allows any topology.
    ///
    /// The default value is [`PrimitiveTopology::TriangleList`].
    pub topology: PrimitiveTopology,

    /// Whether the maximum index value ends the current primitive. Restarting a "list" topology
    /// needs a device feature.
    ///
    /// The default value is `false`.
    pub primitive_restart_enable: bool,

    pub _ne: crate::NonExhaustive,
}

impl Default for InputAssemblyState {
    #[inline]
    fn default() -> Self {
        Self {
            topology: PrimitiveTopology::TriangleList,
            primitive_restart_enable: false,
            _ne: crate::NonExhaustive(()),
        }
    }
}

impl InputAssemblyState {
    pub(crate) fn validate(
        &self,
        device: &Device,
        dynamic_state: DynamicStates,
    ) -> Result<(), Box<ValidationError>> {
        let &Self {
            topology,
            primitive_restart_enable,
            _ne: _,
        } = self;

        match topology {
            PrimitiveTopology::LineListWithAdjacency
            | PrimitiveTopology::LineStripWithAdjacency
            | PrimitiveTopology::TriangleListWithAdjacency
            | PrimitiveTopology::TriangleStripWithAdjacency => {
                if !device.enabled_features().geometry_shader {
                    return Err(Box::new(ValidationError {
                        context: "topology".into(),
                        problem: "is `PrimitiveTopology::*WithAdjacency`".into(),
                        requires_one_of: RequiresOneOf(&[RequiresAllOf(&[
                            Requires::DeviceFeature("geometry_shader"),
                        ])]),
                        vuids: &["VUID-VkPipelineInputAssemblyStateCreateInfo-topology-00429"],
                    }));
                }
            }
            PrimitiveTopology::PatchList => {
                if !device.enabled_features().tessellation_shader {
                    return Err(Box::new(ValidationError {
                        context: "topology".into(),
                        problem: "is `PrimitiveTopology::PatchList`".into(),
                        requires_one_of: RequiresOneOf(&[RequiresAllOf(&[
                            Requires::DeviceFeature("tessellation_shader"),
                        ])]),
                        vuids: &["VUID-VkPipelineInputAssemblyStateCreateInfo-topology-00430"],
                    }));
                }
            }
            _ => (),
        }

        if primitive_restart_enable
            && !dynamic_state.contains_enum(DynamicState::PrimitiveRestartEnable)
            && !dynamic_state.contains_enum(DynamicState::PrimitiveTopology)
        {
            topology.validate_primitive_restart(device).map_err(|err| {
                err.set_vuids(if topology == PrimitiveTopology::PatchList {
                    &["VUID-VkPipelineInputAssemblyStateCreateInfo-topology-06253"]
                } else {
                    &["VUID-VkPipelineInputAssemblyStateCreateInfo-topology-06252"]
                })
            })?;
        }

        Ok(())
    }
}

vulkan_enum! {
    /// Describes how vertices must be grouped together to form primitives.
    ///
    /// When enabling primitive restart, "list" topologies require a feature to be enabled on the
    /// device:
    /// - The `PatchList` topology requires the `primitive_topology_patch_list_restart` feature.
    /// - All other "list" topologies require the `primitive_topology_list_restart` feature.
    PrimitiveTopology impl {
        /// Returns the topology class of this topology.
        #[inline]
        pub fn class(self) -> PrimitiveTopologyClass {
            match self {
                Self::PointList => PrimitiveTopologyClass::Point,
                Self::LineList
                | Self::LineStrip
                | Self::LineListWithAdjacency
                | Self::LineStripWithAdjacency => PrimitiveTopologyClass::Line,
                Self::TriangleList
                | Self::TriangleStrip
                | Self::TriangleFan
                | Self::TriangleListWithAdjacency
                | Self::TriangleStripWithAdjacency => PrimitiveTopologyClass::Triangle,
                Self::PatchList => PrimitiveTopologyClass::Patch,
            }
        }

        /// Returns whether this is one of the line topologies.
        #[inline]
        pub fn is_line(self) -> bool {
            self.class() == PrimitiveTopologyClass::Line
        }

        /// Returns whether this is a "list" topology, where primitive restart needs a feature.
        #[inline]
        pub fn is_list(self) -> bool {
            matches!(
                self,
                Self::PointList
                    | Self::LineList
                    | Self::TriangleList
                    | Self::LineListWithAdjacency
                    | Self::TriangleListWithAdjacency
                    | Self::PatchList
            )
        }

        /// Checks that primitive restart may be enabled together with this topology.
        pub(crate) fn validate_primitive_restart(
            self,
            device: &Device,
        ) -> Result<(), Box<ValidationError>> {
            match self {
                Self::PatchList => {
                    if !device.enabled_features().primitive_topology_patch_list_restart {
                        return Err(Box::new(ValidationError {
                            problem: "the topology is `PrimitiveTopology::PatchList`, and \
                                primitive restart is enabled"
                                .into(),
                            requires_one_of: RequiresOneOf(&[RequiresAllOf(&[
                                Requires::DeviceFeature("primitive_topology_patch_list_restart"),
                            ])]),
                            ..Default::default()
                        }));
                    }
                }
                _ if self.is_list() => {
                    if !device.enabled_features().primitive_topology_list_restart {
                        return Err(Box::new(ValidationError {
                            problem: "the topology is `PrimitiveTopology::*List`, and \
                                primitive restart is enabled"
                                .into(),
                            requires_one_of: RequiresOneOf(&[RequiresAllOf(&[
                                Requires::DeviceFeature("primitive_topology_list_restart"),
                            ])]),
                            ..Default::default()
                        }));
                    }
                }
                _ => (),
            }

            Ok(())
        }
    }
    = PrimitiveTopology(i32);

    PointList = POINT_LIST,
    LineList = LINE_LIST,
    LineStrip = LINE_STRIP,
    TriangleList = TRIANGLE_LIST,
    TriangleStrip = TRIANGLE_STRIP,

    /// Every triangle shares the first vertex.
    TriangleFan = TRIANGLE_FAN,

    LineListWithAdjacency = LINE_LIST_WITH_ADJACENCY,
    LineStripWithAdjacency = LINE_STRIP_WITH_ADJACENCY,
    TriangleListWithAdjacency = TRIANGLE_LIST_WITH_ADJACENCY,
    TriangleStripWithAdjacency = TRIANGLE_STRIP_WITH_ADJACENCY,

    /// Needs tessellation shaders.
    PatchList = PATCH_LIST,
}

impl Default for PrimitiveTopology {
    #[inline]
    fn default() -> Self {
        PrimitiveTopology::TriangleList
    }
}

/// Describes the shape of a primitive topology.
///
/// Topologies of the same class can be substituted for each other when the topology is set
/// dynamically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveTopologyClass {
    Point,
    Line,
    Triangle,
    Patch,
}

impl PrimitiveTopologyClass {
    /// Returns the class of a raw topology value, or `None` if the value is not a topology that
    /// this crate knows of.
    #[inline]
    pub fn of_raw(topology: ash::vk::PrimitiveTopology) -> Option<Self> {
        PrimitiveTopology::try_from(topology)
            .ok()
            .map(PrimitiveTopology::class)
    }
}

#[cfg(test)]
mod tests {
    use super::{InputAssemblyState, PrimitiveTopology, PrimitiveTopologyClass};
    use crate::{
        device::{DeviceExtensions, DeviceFeatures},
        pipeline::DynamicStates,
    };

    const ALL: [PrimitiveTopology; PrimitiveTopology::COUNT] = [
        PrimitiveTopology::PointList,
        PrimitiveTopology::LineList,
        PrimitiveTopology::LineStrip,
        PrimitiveTopology::TriangleList,
        PrimitiveTopology::TriangleStrip,
        PrimitiveTopology::TriangleFan,
        PrimitiveTopology::LineListWithAdjacency,
        PrimitiveTopology::LineStripWithAdjacency,
        PrimitiveTopology::TriangleListWithAdjacency,
        PrimitiveTopology::TriangleStripWithAdjacency,
        PrimitiveTopology::PatchList,
    ];

    #[test]
    fn classes() {
        let count = |class: PrimitiveTopologyClass| {
            ALL.iter().filter(|topology| topology.class() == class).count()
        };
        assert_eq!(count(PrimitiveTopologyClass::Point), 1);
        assert_eq!(count(PrimitiveTopologyClass::Line), 4);
        assert_eq!(count(PrimitiveTopologyClass::Triangle), 5);
        assert_eq!(count(PrimitiveTopologyClass::Patch), 1);

        for topology in ALL {
            assert_eq!(
                PrimitiveTopologyClass::of_raw(topology.into()),
                Some(topology.class()),
            );
        }

        assert_eq!(
            PrimitiveTopologyClass::of_raw(ash::vk::PrimitiveTopology::from_raw(0x7fff)),
            None,
        );
    }

    #[test]
    fn adjacency_requires_geometry_shader() {
        let state = InputAssemblyState {
            topology: PrimitiveTopology::LineListWithAdjacency,
            ..Default::default()
        };

        let err = state
            .validate(&*device!(), DynamicStates::empty())
            .unwrap_err();
        assert_eq!(
            err.vuids,
            &["VUID-VkPipelineInputAssemblyStateCreateInfo-topology-00429"],
        );

        let device = device!(enabled_features: DeviceFeatures {
            geometry_shader: true,
            ..DeviceFeatures::empty()
        });
        assert!(state.validate(&device, DynamicStates::empty()).is_ok());
    }

    #[test]
    fn list_restart() {
        let state = InputAssemblyState {
            topology: PrimitiveTopology::TriangleList,
            primitive_restart_enable: true,
            ..Default::default()
        };

        assert!(state.validate(&*device!(), DynamicStates::empty()).is_err());

        let device = device!(
            enabled_features: DeviceFeatures {
                primitive_topology_list_restart: true,
                ..DeviceFeatures::empty()
            },
            enabled_extensions: DeviceExtensions {
                ext_primitive_topology_list_restart: true,
                ..DeviceExtensions::empty()
            },
        );
        assert!(state.validate(&device, DynamicStates::empty()).is_ok());
    }
}
