#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod animation;
pub mod errors;
pub mod scene;
pub mod shapes;
pub mod stage;
pub mod starfield;
pub mod utils;
pub mod vignettes;

pub use animation::{PlayBatch, RateFunction, Timeline, TimelineEvent, Tween};
pub use errors::StageError;
pub use scene::{CameraPose, Node, NodeHandle, Scene};
pub use shapes::{Shape, Style};
pub use stage::{Choreography, HeadlessHost, RenderHost, Stage};
pub use starfield::StarfieldOptions;
pub use utils::FrameTicker;
pub use vignettes::{RocketLaunch, StarbaseDock};
