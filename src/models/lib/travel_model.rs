/// Define a model struct with our standard set of derives: getters/setters,
/// an owned builder, and serde. The builder's `build()` hands back our own
/// `Result`; `build_inner()` is derive_builder's raw version.
#[macro_export]
macro_rules! travel_model {
    (
        $(#[$struct_meta:meta])*
        pub struct $name:ident {
            $($fields:tt)*
        }
        $builder:ident

    ) => {
        #[derive(Clone, Debug, PartialEq, getset::Getters, getset::Setters, derive_builder::Builder, serde::Serialize, serde::Deserialize)]
        #[builder(pattern = "owned", setter(into), build_fn(name = "build_inner"))]
        #[getset(get = "pub", set = "pub")]
        $(#[$struct_meta])*
        pub struct $name {
            $($fields)*
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }
        }

        impl $builder {
            /// Build the model, failing if a required field was never set.
            pub fn build(self) -> $crate::error::Result<$name> {
                self.build_inner()
                    .map_err(|e| $crate::error::Error::BuilderFailed(e))
            }
        }
    }
}
