//! Domain Entities

mod invalidation_batch;
mod local_file;
mod remote_object;
mod sync_result;

pub use invalidation_batch::{InvalidationBatch, MAX_BATCH_SIZE};
pub use local_file::LocalFile;
pub use remote_object::RemoteObjectRef;
pub use sync_result::SyncResult;
