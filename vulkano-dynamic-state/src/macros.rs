macro_rules! vulkan_enum {
    {
        $(#[doc = $ty_doc:literal])*
        $ty:ident
        $( impl { $($impls:item)* } )?
        = $ty_ffi:ident($repr:ty);

        $(
            $(#[doc = $flag_doc:literal])*
            $flag_name:ident = $flag_name_ffi:ident,
        )+
    } => {
        $(#[doc = $ty_doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr($repr)]
        pub enum $ty {
            $(
                $(#[doc = $flag_doc])*
                $flag_name = ash::vk::$ty_ffi::$flag_name_ffi.as_raw(),
            )+
        }

        impl $ty {
            #[allow(dead_code)]
            pub(crate) const COUNT: usize = [
                $(ash::vk::$ty_ffi::$flag_name_ffi.as_raw()),+
            ].len();

            $(
                $($impls)*
            )?
        }

        impl From<$ty> for ash::vk::$ty_ffi {
            #[inline]
            fn from(val: $ty) -> Self {
                ash::vk::$ty_ffi::from_raw(val as $repr)
            }
        }

        impl TryFrom<ash::vk::$ty_ffi> for $ty {
            type Error = ();

            #[inline]
            fn try_from(val: ash::vk::$ty_ffi) -> Result<Self, Self::Error> {
                Ok(match val {
                    $(
                        ash::vk::$ty_ffi::$flag_name_ffi => Self::$flag_name,
                    )+
                    _ => return Err(()),
                })
            }
        }
    };
}

/// Generates the closed catalogue of dynamic states, and the bitset type over it.
///
/// Each entry becomes one variant of the enum. The position of an entry in the list is its
/// ordinal, and also its bit position in the bitset. Entries without a `RequiresOneOf` clause are
/// available on every device. The `vuids` of an entry are the ones violated when its command is
/// recorded without meeting the requirements.
macro_rules! dynamic_states {
    {
        $(#[doc = $ty_doc:literal])*
        $ty:ident,

        $(#[doc = $ty_set_doc:literal])*
        $ty_set:ident($repr:ty);

        $(
            $(#[doc = $flag_doc:literal])*
            $flag_name:ident = $flag_name_ffi:ident {
                group: $group:ident,
                command: $command:literal,
                $(
                    vuids: [$($vuid:literal),* $(,)?],
                    RequiresOneOf([
                        $(RequiresAllOf([
                            $(APIVersion($api_version:ident) $(,)?)?
                            $($(DeviceFeature($device_feature:ident)),+ $(,)?)?
                            $($(DeviceExtension($device_extension:ident)),+ $(,)?)?
                        ])),+ $(,)?
                    ]),
                )?
            },
        )+
    } => {
        $(#[doc = $ty_doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum $ty {
            $(
                $(#[doc = $flag_doc])*
                $flag_name,
            )+
        }

        impl $ty {
            /// The number of entries in the catalogue.
            pub const COUNT: usize = [$(Self::$flag_name),+].len();

            /// Every entry in the catalogue, in ordinal order.
            pub const ALL: &'static [Self] = &[$(Self::$flag_name),+];

            /// Returns the entry with the given ordinal, if there is one.
            #[inline]
            pub const fn from_ordinal(ordinal: usize) -> Option<Self> {
                if ordinal < Self::COUNT {
                    Some(Self::ALL[ordinal])
                } else {
                    None
                }
            }

            /// Returns the ordinal of `self`, which is also its bit position in
            #[doc = concat!("[`", stringify!($ty_set), "`].")]
            #[inline]
            pub const fn ordinal(self) -> usize {
                self as usize
            }

            /// Returns the Vulkan name of the state, as it appears in diagnostics.
            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $(
                        Self::$flag_name => concat!("VK_DYNAMIC_STATE_", stringify!($flag_name_ffi)),
                    )+
                }
            }

            /// Returns the name of the command that sets the state.
            #[inline]
            pub const fn set_command(self) -> &'static str {
                match self {
                    $(
                        Self::$flag_name => $command,
                    )+
                }
            }

            /// Returns the pipeline sub-state that the state belongs to.
            #[inline]
            pub const fn group(self) -> crate::pipeline::StateGroup {
                match self {
                    $(
                        Self::$flag_name => crate::pipeline::StateGroup::$group,
                    )+
                }
            }

            /// Returns the VUIDs that are violated when the command that sets the state is
            /// recorded without the feature that backs it.
            #[inline]
            pub const fn set_command_vuids(self) -> &'static [&'static str] {
                match self {
                    $(
                        $(
                            Self::$flag_name => &[$($vuid),*],
                        )?
                    )+
                    #[allow(unreachable_patterns)]
                    _ => &[],
                }
            }

            /// Returns what must be supported or enabled before the command that sets the state
            /// can be recorded.
            #[inline]
            pub const fn requires_one_of(self) -> crate::RequiresOneOf {
                match self {
                    $(
                        $(
                            Self::$flag_name => crate::RequiresOneOf(&[
                                $(crate::RequiresAllOf(&[
                                    $(
                                        crate::Requires::APIVersion(crate::Version::$api_version),
                                    )?
                                    $($(
                                        crate::Requires::DeviceFeature(stringify!($device_feature)),
                                    )+)?
                                    $($(
                                        crate::Requires::DeviceExtension(stringify!($device_extension)),
                                    )+)?
                                ])),+
                            ]),
                        )?
                    )+
                    #[allow(unreachable_patterns)]
                    _ => crate::RequiresOneOf(&[]),
                }
            }

            /// Returns whether the command that sets the state may be recorded with the given
            /// device configuration.
            pub fn is_supported_by(
                self,
                #[allow(unused_variables)] api_version: crate::Version,
                #[allow(unused_variables)] features: &crate::device::DeviceFeatures,
                #[allow(unused_variables)] extensions: &crate::device::DeviceExtensions,
            ) -> bool {
                match self {
                    $(
                        $(
                            Self::$flag_name => [
                                $([
                                    $(
                                        api_version >= crate::Version::$api_version,
                                    )?
                                    $($(
                                        features.$device_feature,
                                    )+)?
                                    $($(
                                        extensions.$device_extension,
                                    )+)?
                                ].into_iter().all(|x| x)),+
                            ].into_iter().any(|x| x),
                        )?
                    )+
                    #[allow(unreachable_patterns)]
                    _ => true,
                }
            }
        }

        impl From<$ty> for ash::vk::DynamicState {
            #[inline]
            fn from(val: $ty) -> Self {
                match val {
                    $(
                        $ty::$flag_name => ash::vk::DynamicState::$flag_name_ffi,
                    )+
                }
            }
        }

        impl TryFrom<ash::vk::DynamicState> for $ty {
            type Error = ();

            #[inline]
            fn try_from(val: ash::vk::DynamicState) -> Result<Self, Self::Error> {
                Ok(match val {
                    $(
                        ash::vk::DynamicState::$flag_name_ffi => Self::$flag_name,
                    )+
                    _ => return Err(()),
                })
            }
        }

        $(#[doc = $ty_set_doc])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $ty_set($repr);

        impl $ty_set {
            #[doc = concat!("Returns a `", stringify!($ty_set), "` with no states set.")]
            #[inline]
            pub const fn empty() -> Self {
                Self(0)
            }

            #[doc = concat!("Returns a `", stringify!($ty_set), "` with every state set.")]
            #[inline]
            pub const fn all() -> Self {
                Self(Self::all_raw())
            }

            const fn all_raw() -> $repr {
                0
                $(
                    | (1 << $ty::$flag_name as u32)
                )+
            }

            /// Returns `self` with `val` added.
            #[inline]
            pub const fn with(self, val: $ty) -> Self {
                Self(self.0 | 1 << val as u32)
            }

            /// Returns the number of states set in `self`.
            #[inline]
            pub const fn count(self) -> u32 {
                self.0.count_ones()
            }

            /// Returns whether no states are set in `self`.
            #[inline]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Returns whether `val` is set in `self`.
            #[inline]
            pub const fn contains_enum(self, val: $ty) -> bool {
                self.0 & (1 << val as u32) != 0
            }

            /// Adds `val` to `self`.
            #[inline]
            pub fn insert(&mut self, val: $ty) {
                self.0 |= 1 << val as u32;
            }

            /// Removes `val` from `self`.
            #[inline]
            pub fn remove(&mut self, val: $ty) {
                self.0 &= !(1 << val as u32);
            }

            /// Returns whether any states are set in both `self` and `other`.
            #[inline]
            pub const fn intersects(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            /// Returns whether all states in `other` are set in `self`.
            #[inline]
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// Returns the union of `self` and `other`.
            #[inline]
            pub const fn union(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }

            /// Returns the intersection of `self` and `other`.
            #[inline]
            pub const fn intersection(self, other: Self) -> Self {
                Self(self.0 & other.0)
            }

            /// Returns `self` without the states set in `other`.
            #[inline]
            pub const fn difference(self, other: Self) -> Self {
                Self(self.0 & !other.0)
            }

            /// Returns the states that are set in `self` or `other`, but not in both.
            #[inline]
            pub const fn symmetric_difference(self, other: Self) -> Self {
                Self(self.0 ^ other.0)
            }

            /// Returns the states not in `self`.
            #[inline]
            pub const fn complement(self) -> Self {
                Self(!self.0 & Self::all_raw())
            }
        }

        impl Default for $ty_set {
            #[inline]
            fn default() -> Self {
                Self::empty()
            }
        }

        impl std::fmt::Debug for $ty_set {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
                let mut written = false;

                for state in *self {
                    if written {
                        write!(f, " | ")?;
                    }

                    write!(f, "{}", state.name())?;
                    written = true;
                }

                if !written {
                    write!(f, "empty()")?;
                }

                Ok(())
            }
        }

        impl From<$ty> for $ty_set {
            #[inline]
            fn from(val: $ty) -> Self {
                Self::empty().with(val)
            }
        }

        impl FromIterator<$ty> for $ty_set {
            #[inline]
            fn from_iter<T>(iter: T) -> Self
            where
                T: IntoIterator<Item = $ty>,
            {
                iter.into_iter().fold(Self::empty(), |r, i| r.with(i))
            }
        }

        impl IntoIterator for $ty_set {
            type Item = $ty;
            type IntoIter = DynamicStatesIter;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                DynamicStatesIter(self.0)
            }
        }

        /// Iterates over the states in a set, in ordinal order.
        #[derive(Clone, Debug)]
        pub struct DynamicStatesIter($repr);

        impl Iterator for DynamicStatesIter {
            type Item = $ty;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                while self.0 != 0 {
                    let ordinal = self.0.trailing_zeros() as usize;
                    self.0 &= self.0 - 1;

                    if let Some(state) = $ty::from_ordinal(ordinal) {
                        return Some(state);
                    }
                }

                None
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                let len = self.0.count_ones() as usize;
                (len, Some(len))
            }
        }

        impl ExactSizeIterator for DynamicStatesIter {}

        impl std::ops::BitAnd for $ty_set {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                self.intersection(rhs)
            }
        }

        impl std::ops::BitAndAssign for $ty_set {
            #[inline]
            fn bitand_assign(&mut self, rhs: Self) {
                *self = self.intersection(rhs);
            }
        }

        impl std::ops::BitOr for $ty_set {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                self.union(rhs)
            }
        }

        impl std::ops::BitOrAssign for $ty_set {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                *self = self.union(rhs);
            }
        }

        impl std::ops::BitXor for $ty_set {
            type Output = Self;

            #[inline]
            fn bitxor(self, rhs: Self) -> Self {
                self.symmetric_difference(rhs)
            }
        }

        impl std::ops::BitXorAssign for $ty_set {
            #[inline]
            fn bitxor_assign(&mut self, rhs: Self) {
                *self = self.symmetric_difference(rhs);
            }
        }

        impl std::ops::Sub for $ty_set {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                self.difference(rhs)
            }
        }

        impl std::ops::SubAssign for $ty_set {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = self.difference(rhs);
            }
        }

        impl std::ops::Not for $ty_set {
            type Output = Self;

            #[inline]
            fn not(self) -> Self {
                self.complement()
            }
        }
    };
}

/// Generates a struct with one `bool` field per named item, for sets of device features and
/// device extensions.
macro_rules! device_flags {
    {
        $(#[doc = $ty_doc:literal])*
        $ty:ident;

        $(
            $(#[doc = $member_doc:literal])*
            $member:ident,
        )+
    } => {
        $(#[doc = $ty_doc])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $ty {
            $(
                $(#[doc = $member_doc])*
                pub $member: bool,
            )+
            pub _ne: crate::NonExhaustive,
        }

        impl $ty {
            const NAMES: &'static [&'static str] = &[$(stringify!($member)),+];

            #[doc = concat!("Returns a `", stringify!($ty), "` with none of the members set.")]
            #[inline]
            pub const fn empty() -> Self {
                Self {
                    $($member: false,)+
                    _ne: crate::NonExhaustive(()),
                }
            }

            #[doc = concat!("Returns a `", stringify!($ty), "` with all of the members set.")]
            #[inline]
            pub const fn all() -> Self {
                Self {
                    $($member: true,)+
                    _ne: crate::NonExhaustive(()),
                }
            }

            /// Returns the number of members set in `self`.
            #[inline]
            pub const fn count(&self) -> u64 {
                0 $(+ self.$member as u64)+
            }

            /// Returns whether no members are set in `self`.
            #[inline]
            pub const fn is_empty(&self) -> bool {
                !($(self.$member)||+)
            }

            /// Returns whether any members are set in both `self` and `other`.
            #[inline]
            pub const fn intersects(&self, other: &Self) -> bool {
                $((self.$member && other.$member))||+
            }

            /// Returns whether all members in `other` are set in `self`.
            #[inline]
            pub const fn contains(&self, other: &Self) -> bool {
                $((self.$member || !other.$member))&&+
            }

            /// Returns the union of `self` and `other`.
            #[inline]
            pub const fn union(&self, other: &Self) -> Self {
                Self {
                    $($member: self.$member || other.$member,)+
                    _ne: crate::NonExhaustive(()),
                }
            }

            /// Returns the intersection of `self` and `other`.
            #[inline]
            pub const fn intersection(&self, other: &Self) -> Self {
                Self {
                    $($member: self.$member && other.$member,)+
                    _ne: crate::NonExhaustive(()),
                }
            }

            /// Returns `self` without the members set in `other`.
            #[inline]
            pub const fn difference(&self, other: &Self) -> Self {
                Self {
                    $($member: self.$member && !other.$member,)+
                    _ne: crate::NonExhaustive(()),
                }
            }

            /// Sets the member with the given name. Returns `false` if there is no such member.
            pub fn set_by_name(&mut self, name: &str, value: bool) -> bool {
                $(
                    if name == stringify!($member) {
                        self.$member = value;
                        return true;
                    }
                )+

                false
            }

            /// Returns an iterator over the names of the members set in `self`.
            pub fn iter_enabled(&self) -> impl Iterator<Item = &'static str> {
                Self::NAMES
                    .iter()
                    .zip([$(self.$member),+])
                    .filter_map(|(&name, enabled)| enabled.then_some(name))
            }
        }

        impl Default for $ty {
            #[inline]
            fn default() -> Self {
                Self::empty()
            }
        }

        impl std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
                write!(f, "[")?;

                let mut first = true;

                for name in self.iter_enabled() {
                    if !first {
                        write!(f, ", ")?;
                    }

                    first = false;
                    write!(f, "{}", name)?;
                }

                write!(f, "]")
            }
        }

        impl std::ops::BitAnd for $ty {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: Self) -> Self::Output {
                self.intersection(&rhs)
            }
        }

        impl std::ops::BitOr for $ty {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self::Output {
                self.union(&rhs)
            }
        }

        impl std::ops::Sub for $ty {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                self.difference(&rhs)
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_seq(self.iter_enabled())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Visitor;

                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = $ty;

                    fn expecting(
                        &self,
                        formatter: &mut std::fmt::Formatter<'_>,
                    ) -> std::fmt::Result {
                        write!(formatter, "a list of {} names", stringify!($ty))
                    }

                    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                    where
                        A: serde::de::SeqAccess<'de>,
                    {
                        let mut value = $ty::empty();

                        while let Some(name) = seq.next_element::<std::borrow::Cow<'de, str>>()? {
                            if !value.set_by_name(&name, true) {
                                return Err(serde::de::Error::unknown_variant(&name, $ty::NAMES));
                            }
                        }

                        Ok(value)
                    }
                }

                deserializer.deserialize_seq(Visitor)
            }
        }
    };
}

pub(crate) use device_flags;
pub(crate) use dynamic_states;
pub(crate) use vulkan_enum;
