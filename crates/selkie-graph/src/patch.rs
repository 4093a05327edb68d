/// Labels that can be created from, and shallow-merged with, a partial patch.
///
/// `apply_patch` must only touch fields the patch actually carries; absent
/// fields keep their current value. This is what gives `merge_node` /
/// `merge_edge` their upsert semantics.
pub trait Patchable {
    type Patch;

    fn from_patch(patch: Self::Patch) -> Self;

    fn apply_patch(&mut self, patch: Self::Patch);
}
