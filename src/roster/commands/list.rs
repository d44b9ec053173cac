use crate::model::Student;
use crate::ordering::OrderingPolicy;
use crate::store::StudentStore;
use tracing::trace;

/// The roster as the given policy orders it. The store itself is not reordered.
pub fn run<S, P>(store: &S, policy: &P) -> Vec<Student>
where
    S: StudentStore,
    P: OrderingPolicy + ?Sized,
{
    trace!(policy = policy.name(), count = store.len(), "listing students");
    policy.order(store.list().to_vec())
}
