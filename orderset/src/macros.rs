#[macro_export]
/// Create an [`OrderedSet`][crate::OrderedSet] from a list of key-value pairs.
///
/// Repeated keys keep their first position and take the last value, like
/// repeated [`upsert`][crate::OrderedSet::upsert] calls.
///
/// ## Example
///
/// ```
/// use orderset::orderset;
///
/// let set = orderset! {
///     "a" => 1,
///     "b" => 2,
/// };
/// assert_eq!(set["a"], 1);
/// assert_eq!(set["b"], 2);
/// assert_eq!(set.get("c"), None);
///
/// // "a" is the first key
/// assert_eq!(set.keys().next(), Some(&"a"));
/// ```
macro_rules! orderset {
    ($($key:expr => $value:expr,)+) => { $crate::orderset!($($key => $value),+) };
    ($($key:expr => $value:expr),*) => {
        {
            // Note: `stringify!($key)` is just here to consume the repetition,
            // but we throw away that string literal during constant evaluation.
            const CAP: usize = <[()]>::len(&[$({ stringify!($key); }),*]);
            #[allow(unused_mut)]
            let mut set = $crate::OrderedSet::with_capacity(CAP);
            $(
                set.upsert($key, $value);
            )*
            set
        }
    };
}

// generate all the Iterator methods by forwarding to the underlying key
// iterator in self.iter and mapping each key with the method $map_elt.
macro_rules! iterator_methods {
    // $map_elt is a `&self` method from a borrowed key to the element
    ($map_elt:ident) => {
        fn next(&mut self) -> Option<Self::Item> {
            let key = self.iter.next()?;
            Some(self.$map_elt(key))
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            self.iter.size_hint()
        }

        fn count(self) -> usize {
            self.iter.len()
        }

        fn nth(&mut self, n: usize) -> Option<Self::Item> {
            let key = self.iter.nth(n)?;
            Some(self.$map_elt(key))
        }

        fn last(mut self) -> Option<Self::Item> {
            self.next_back()
        }
    };
}

macro_rules! double_ended_iterator_methods {
    // same mapping method as `iterator_methods!`
    ($map_elt:ident) => {
        fn next_back(&mut self) -> Option<Self::Item> {
            let key = self.iter.next_back()?;
            Some(self.$map_elt(key))
        }

        fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
            let key = self.iter.nth_back(n)?;
            Some(self.$map_elt(key))
        }
    };
}
