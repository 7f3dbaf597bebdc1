mod guide;
mod practice;

pub use guide::GuideView;
pub use practice::{PracticeProvider, PracticeView};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
