/// Declares a typed position into a list of `$item`, so a `CityIdx` can never index the order
/// list by accident.
///
/// ```ignore
/// define_index_newtype!(
///     /// Position of a city in its graph
///     CityIdx => City
/// );
/// ```
#[macro_export]
macro_rules! define_index_newtype {
    ($(#[$meta:meta])* $name:ident => $item:ty) => {
        $(#[$meta])*
        #[derive(
            serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
        )]
        pub struct $name(usize);

        impl $name {
            pub const fn new(position: usize) -> Self {
                $name(position)
            }

            pub const fn get(&self) -> usize {
                self.0
            }

            /// Pairs every item with its typed position.
            pub fn enumerate(items: &[$item]) -> impl Iterator<Item = ($name, &$item)> {
                items
                    .iter()
                    .enumerate()
                    .map(|(position, item)| ($name(position), item))
            }

            /// `true` when this position exists in a list of `len` items.
            pub const fn is_within(&self, len: usize) -> bool {
                self.0 < len
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$name> for usize {
            fn from(position: $name) -> usize {
                position.0
            }
        }

        impl std::ops::Index<$name> for [$item] {
            type Output = $item;

            fn index(&self, position: $name) -> &$item {
                &self[position.0]
            }
        }

        impl std::ops::Index<$name> for Vec<$item> {
            type Output = $item;

            fn index(&self, position: $name) -> &$item {
                &self.as_slice()[position]
            }
        }
    };
}
