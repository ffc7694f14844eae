use ::quickcheck::{Arbitrary, Gen};
use compare::Compare;
use super::Tree;

impl<T, C> Arbitrary for Tree<T, C>
    where T: Arbitrary, C: 'static + Clone + Compare<T> + Default + Send {

    fn arbitrary(gen: &mut Gen) -> Self {
        Vec::<T>::arbitrary(gen).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let vec: Vec<T> = self.clone().into_iter().collect();
        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}
