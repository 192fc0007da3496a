/// Defines a newtype ID wrapper around an integer-like scalar (typically `u32`)
/// and generates:
/// - derives (Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)
/// - `Display`
/// - `From<$inner> for $name` and `From<$name> for $inner`
/// - `FromStr`, accepting the bare number or a `"<prefix> <number>"` form
///   (prefix matched ignoring ASCII case)
///
/// Usage:
///   define_id_type!(u32, HipId, "HIP");
#[macro_export]
macro_rules! define_id_type {
    ($inner:ty, $name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(pub $inner);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::std::convert::From<$inner> for $name {
            fn from(v: $inner) -> Self {
                $name(v)
            }
        }

        impl ::std::convert::From<$name> for $inner {
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                let digits = trimmed
                    .get(..$prefix.len())
                    .filter(|head| head.eq_ignore_ascii_case($prefix))
                    .map(|_| trimmed[$prefix.len()..].trim_start())
                    .unwrap_or(trimmed);
                digits
                    .parse::<$inner>()
                    .map($name)
                    .map_err(|e| format!("Invalid {} identifier '{}': {}", $prefix, s, e))
            }
        }

        impl $name {
            pub fn new(value: $inner) -> Self {
                $name(value)
            }

            pub fn value(&self) -> $inner {
                self.0
            }

            /// Catalog designation, e.g. `"HIP 32349"`.
            pub fn designation(&self) -> String {
                format!("{} {}", $prefix, self.0)
            }
        }
    };
}
