//! Macros for declaring gameplay object state enums.

/// Generate an [`ObjectState`](crate::core::ObjectState) enum and its trait
/// implementation.
///
/// The enum must contain variants literally named `Disabled` and
/// `Transition`; the `fallback:` marker names the steady state used when a
/// forbidden initial state is supplied.
///
/// # Example
///
/// ```
/// use gameplay_objects::object_state;
///
/// object_state! {
///     /// States of a drawbridge.
///     pub enum BridgeState {
///         Raised,
///         Lowered,
///         Disabled,
///         Transition,
///     }
///     fallback: Raised
/// }
/// ```
#[macro_export]
macro_rules! object_state {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        fallback: $fallback:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Copy,
            Clone,
            PartialEq,
            Eq,
            Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::ObjectState for $name {
            const TRANSITION: Self = Self::Transition;
            const DISABLED: Self = Self::Disabled;

            fn fallback_initial() -> Self {
                Self::$fallback
            }

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::ObjectState;

    object_state! {
        enum TestState {
            Raised,
            Lowered,
            Disabled,
            Transition,
        }
        fallback: Lowered
    }

    #[test]
    fn object_state_macro_generates_trait() {
        assert_eq!(TestState::Raised.name(), "Raised");
        assert_eq!(TestState::fallback_initial(), TestState::Lowered);
        assert_eq!(TestState::TRANSITION, TestState::Transition);
        assert_eq!(TestState::DISABLED, TestState::Disabled);
        assert!(TestState::Transition.is_transition());
        assert!(TestState::Disabled.is_disabled());
    }

    #[test]
    fn object_state_supports_visibility() {
        object_state! {
            pub enum PublicState {
                On,
                Off,
                Disabled,
                Transition,
            }
            fallback: Off
        }

        let _state = PublicState::On;
    }
}
