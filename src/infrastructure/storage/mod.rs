mod object_store_sink;
mod recording_sink;
mod sink_factory;

pub use object_store_sink::ObjectStoreSaveSink;
pub use recording_sink::{RecordingSaveSink, SinkCall};
pub use sink_factory::SaveSinkFactory;
