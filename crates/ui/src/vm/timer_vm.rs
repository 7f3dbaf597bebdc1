use quiz_core::timer::Countdown;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerVm {
    pub label: String,
    pub button_label: &'static str,
    pub expired: bool,
}

#[must_use]
pub fn map_timer(timer: &Countdown) -> TimerVm {
    TimerVm {
        label: timer.label(),
        button_label: if timer.is_running() { "Pause" } else { "Start" },
        expired: timer.is_expired(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_follows_running_state() {
        let mut timer = Countdown::new(1200);
        assert_eq!(map_timer(&timer).button_label, "Start");
        timer.start();
        timer.tick();
        let vm = map_timer(&timer);
        assert_eq!(vm.button_label, "Pause");
        assert_eq!(vm.label, "19:59");
        assert!(!vm.expired);
    }
}
