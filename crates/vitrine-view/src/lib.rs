pub mod page;
pub mod reveal;
pub mod scroll;

pub use page::{Page, PageKind, TeardownHandle};
pub use reveal::{AnimationVariant, CountUp, ElementId, RevealController, RevealEvent, RevealState};
pub use scroll::{ChannelSet, ScrollFrame, SmoothedScroll, TransformChannel};
