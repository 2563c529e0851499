mod values;

pub mod batch;
pub mod easing;
pub(crate) mod player;
pub mod timeline;
pub mod tween;

pub use batch::{DEFAULT_RUN_TIME, PlayBatch};
pub use easing::RateFunction;
pub use timeline::{BatchRecord, OpRecord, Timeline, TimelineEvent};
pub use tween::{Tween, TweenOp, TweenTarget};
pub use values::Interpolatable;
