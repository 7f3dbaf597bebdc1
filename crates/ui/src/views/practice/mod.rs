mod actions;
mod components;
mod scripts;
pub(crate) mod state;
mod view;

pub use state::PracticeProvider;
pub use view::PracticeView;

#[cfg(test)]
pub(crate) use view::PracticeTestHandles;
#[cfg(test)]
mod intent_smoke;
