// 以墙钟时间驱动的周期定时器，带显式的启动/停止生命周期。
// 每帧调用 fire 询问自上次以来到期了几个周期，帧率波动时会补齐。
#[derive(Clone, Copy, Debug)]
pub struct IntervalTimer {
    period: f64,
    deadline: Option<f64>,
}

impl IntervalTimer {
    // 创建一个未启动的定时器
    pub fn new(period: f64) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    // 从 now 起开始计时，下一次到期在 now + period
    pub fn start(&mut self, now: f64) {
        self.deadline = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    // 返回截至 now 到期的周期数，并推进下一次到期时间
    pub fn fire(&mut self, now: f64) -> u32 {
        let Some(deadline) = self.deadline.as_mut() else {
            return 0;
        };
        let mut count = 0;
        while *deadline <= now {
            *deadline += self.period;
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_timer_never_fires() {
        let mut timer = IntervalTimer::new(0.2);
        assert!(!timer.is_running());
        assert_eq!(timer.fire(100.0), 0);
    }

    #[test]
    fn fires_once_per_elapsed_period() {
        let mut timer = IntervalTimer::new(0.2);
        timer.start(0.0);
        assert_eq!(timer.fire(0.1), 0);
        assert_eq!(timer.fire(0.2), 1);
        assert_eq!(timer.fire(0.3), 0);
        assert_eq!(timer.fire(0.4), 1);
    }

    // 长帧之后按经过的周期数补齐
    #[test]
    fn catches_up_after_long_gap() {
        let mut timer = IntervalTimer::new(0.2);
        timer.start(0.0);
        assert_eq!(timer.fire(1.0), 5);
        assert_eq!(timer.fire(1.0), 0);
    }

    #[test]
    fn stop_resets_the_schedule() {
        let mut timer = IntervalTimer::new(0.2);
        timer.start(0.0);
        timer.stop();
        assert!(!timer.is_running());
        assert_eq!(timer.fire(10.0), 0);

        // 重新启动后从新的起点计时
        timer.start(10.0);
        assert_eq!(timer.fire(10.1), 0);
        assert_eq!(timer.fire(10.2), 1);
    }
}
