//! # `record!` — Declaring Validated Records
//!
//! Generates a struct together with its [`Inspect`](crate::Inspect)
//! implementation. Each field may carry a tag after `=>`; the field's
//! declared visibility decides whether it is exported. Private fields are
//! unexported.
//!
//! ```
//! tagcheck::record! {
//!     #[derive(Debug)]
//!     pub struct Signup {
//!         pub handle: String => "min:3;max:16",
//!         pub age: u32 => "min:18",
//!         pub plan: String => "in:free,pro",
//!         pub tags: Vec<String> => "max:10",
//!         referrer: Option<String>,
//!     }
//! }
//!
//! let signup = Signup {
//!     handle: "ferris".into(),
//!     age: 30,
//!     plan: "pro".into(),
//!     tags: vec!["rust".into()],
//!     referrer: None,
//! };
//! assert!(tagcheck::validate(&signup).is_ok());
//! # let _ = &signup.referrer;
//! ```

/// Declares a struct and implements [`Inspect`](crate::Inspect) for it.
///
/// See the [module documentation](crate::macros) for the syntax.
#[macro_export]
macro_rules! record {
    (@tag) => {
        ""
    };
    (@tag $tag:literal) => {
        $tag
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty $(=> $tag:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Inspect for $name {
            fn inspect(&self) -> $crate::Value<'_> {
                $crate::Value::Record(::std::vec![
                    $(
                        $crate::Field::new(::std::stringify!($field), &self.$field)
                            .with_tag($crate::record!(@tag $($tag)?))
                            .with_visibility($crate::Visibility::from_declared(
                                ::std::stringify!($field_vis),
                            )),
                    )*
                ])
            }
        }
    };
}
