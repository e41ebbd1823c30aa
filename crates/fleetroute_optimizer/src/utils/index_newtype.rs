/// Declares a `usize` newtype that indexes slices of `$item`, so positions
/// into different collections cannot be mixed up.
#[macro_export]
macro_rules! define_index_newtype {
    ($name:ident, $item:ty) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(usize);

        impl $name {
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            pub const fn get(&self) -> usize {
                self.0
            }
        }

        impl std::ops::Index<$name> for [$item] {
            type Output = $item;

            fn index(&self, index: $name) -> &Self::Output {
                &self[index.0]
            }
        }
    };
}
