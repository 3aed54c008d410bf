pub mod capability;
pub mod capability_registry;

pub use capability::{Candidate, CapabilityKey};
pub use capability_registry::CapabilityRegistry;

/// Build a registry `Candidate` for a concrete type.
///
/// The type must implement `Default` and `CapabilityKey`, and coerce into
/// the capability trait object named after `=>`.
///
/// ```rust,ignore
/// let candidate = capability_candidate!(StripePayment => dyn PaymentProcessor);
/// ```
#[macro_export]
macro_rules! capability_candidate {
    ($ty:ty => $capability:ty) => {{
        fn construct() -> ::std::boxed::Box<$capability> {
            ::std::boxed::Box::new(<$ty as ::std::default::Default>::default())
        }
        $crate::registry::Candidate::<$capability>::new(
            stringify!($ty),
            <$ty as $crate::registry::CapabilityKey>::KEY,
            construct,
        )
    }};
}

/// Attach a capability key to a type.
///
/// ```rust,ignore
/// capability_key!(StripePayment => "stripe");
/// ```
#[macro_export]
macro_rules! capability_key {
    ($ty:ty => $key:literal) => {
        impl $crate::registry::CapabilityKey for $ty {
            const KEY: ::std::option::Option<&'static str> = ::std::option::Option::Some($key);
        }
    };
}
