//! Macros for declaring state sets.

/// Declare a state enum and derive its [`State`](crate::core::State)
/// implementation.
///
/// Ids follow declaration order starting at 1, so two variants can never
/// share an id. The generated inherent `state_id` is a `const fn`, which lets
/// callers pin ids with compile-time assertions.
///
/// # Example
///
/// ```
/// use navflow::core::State;
/// use navflow::state_set;
///
/// state_set! {
///     pub enum Job {
///         Queued,
///         Running,
///         Done,
///         Crashed,
///     }
///     final: [Done, Crashed]
///     error: [Crashed]
/// }
///
/// const _: () = assert!(Job::Running.state_id().get() == 2);
///
/// assert_eq!(Job::ALL.len(), 4);
/// assert!(Job::Crashed.is_error());
/// ```
#[macro_export]
macro_rules! state_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        #[repr(u16)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $name {
            /// Registered id of this state.
            #[allow(dead_code)]
            $vis const fn state_id(self) -> $crate::core::StateId {
                $crate::core::StateId::new(self as u16 + 1)
            }
        }

        impl $crate::core::State for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn id(&self) -> $crate::core::StateId {
                self.state_id()
            }

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            #[allow(unreachable_patterns)]
            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{State, StateId, StateRegistry};

    state_set! {
        enum TestState {
            Initial,
            Processing,
            Complete,
            Failed,
        }
        final: [Complete, Failed]
        error: [Failed]
    }

    const _: () = assert!(TestState::Initial.state_id().get() == 1);
    const _: () = assert!(TestState::Failed.state_id().get() == 4);

    #[test]
    fn state_set_macro_generates_trait() {
        let state = TestState::Initial;
        assert_eq!(state.name(), "Initial");
        assert!(!state.is_final());
        assert!(!state.is_error());

        let complete = TestState::Complete;
        assert!(complete.is_final());
        assert!(!complete.is_error());

        let failed = TestState::Failed;
        assert!(failed.is_final());
        assert!(failed.is_error());
    }

    #[test]
    fn ids_follow_declaration_order() {
        let ids: Vec<u16> = TestState::ALL.iter().map(|s| s.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(TestState::Processing.id(), StateId::new(2));
    }

    #[test]
    fn generated_set_passes_registry_validation() {
        assert!(StateRegistry::<TestState>::new().is_ok());
    }

    #[test]
    fn state_set_supports_visibility() {
        state_set! {
            pub enum PublicState {
                A,
                B,
            }
            final: [B]
        }

        assert_eq!(PublicState::B.state_id().get(), 2);
    }

    #[test]
    fn state_set_works_without_final_error() {
        state_set! {
            enum MinimalState {
                One,
                Two,
            }
        }

        let state = MinimalState::One;
        assert!(!state.is_final());
        assert!(!state.is_error());
    }
}
