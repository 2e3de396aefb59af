mod common;

mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_pixel_rings::channel::{Channel, TryReceiveError, TrySendError};
    use myrtio_pixel_rings::layout::DEFAULT_PIXEL_COUNT;
    use myrtio_pixel_rings::{
        Color, CommandChannel, DEFAULT_LAYOUT, PixelCommand, PixelScheduler, SchedulerConfig,
        ZoneId,
    };

    use crate::common::MemoryPixels;

    const IDLE: Duration = Duration::from_millis(50);

    fn config() -> SchedulerConfig {
        SchedulerConfig {
            layout: DEFAULT_LAYOUT,
            idle_interval: IDLE,
        }
    }

    #[test]
    fn test_channel_is_fifo_and_bounded() {
        let channel = Channel::<u8, 2>::new();
        let sender = channel.sender();
        let receiver = channel.receiver();

        assert!(channel.is_empty());
        assert_eq!(sender.try_send(1), Ok(()));
        assert_eq!(sender.try_send(2), Ok(()));
        assert_eq!(sender.try_send(3), Err(TrySendError(3)));
        assert_eq!(channel.len(), 2);

        assert_eq!(receiver.try_receive(), Ok(1));
        assert_eq!(receiver.try_receive(), Ok(2));
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));

        sender.try_send(4).unwrap();
        channel.clear();
        assert!(channel.is_empty());
    }

    #[test]
    fn test_idle_ticks() {
        let channel = CommandChannel::<4>::new();
        let mut scheduler = PixelScheduler::new(
            MemoryPixels::<DEFAULT_PIXEL_COUNT>::new(),
            channel.receiver(),
            &config(),
        );

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(50));
        assert_eq!(result.sleep_duration, IDLE);

        let result = scheduler.tick(Instant::from_millis(60));
        assert_eq!(result.next_deadline, Instant::from_millis(100));
        assert_eq!(result.sleep_duration, Duration::from_millis(40));

        assert!(!scheduler.is_animating());
        assert_eq!(scheduler.pixels().shows(), 0);
    }

    #[test]
    fn test_drift_resets_schedule() {
        let channel = CommandChannel::<4>::new();
        let mut scheduler = PixelScheduler::new(
            MemoryPixels::<DEFAULT_PIXEL_COUNT>::new(),
            channel.receiver(),
            &config(),
        );

        scheduler.tick(Instant::from_millis(0));
        let result = scheduler.tick(Instant::from_millis(10_000));
        assert_eq!(result.next_deadline, Instant::from_millis(10_050));
        assert_eq!(result.sleep_duration, IDLE);
    }

    #[test]
    fn test_rainbow_steps_one_frame_per_tick() {
        let channel = CommandChannel::<4>::new();
        let sender = channel.sender();
        let mut scheduler = PixelScheduler::new(
            MemoryPixels::<DEFAULT_PIXEL_COUNT>::new(),
            channel.receiver(),
            &config(),
        );

        sender
            .try_send(PixelCommand::StartRainbow(Duration::from_millis(20)))
            .unwrap();

        let mut now = Instant::from_millis(0);
        let result = scheduler.tick(now);
        assert!(scheduler.is_animating());
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
        assert_eq!(scheduler.pixels().shows(), 1);

        for _ in 1..768 {
            now = scheduler.tick(now).next_deadline;
        }
        assert_eq!(scheduler.pixels().shows(), 768);
        assert!(scheduler.is_animating());

        let result = scheduler.tick(now);
        assert!(!scheduler.is_animating());
        assert_eq!(result.sleep_duration, IDLE);
        assert_eq!(scheduler.pixels().shows(), 768);
    }

    #[test]
    fn test_stop_animation_command() {
        let channel = CommandChannel::<4>::new();
        let sender = channel.sender();
        let mut scheduler = PixelScheduler::new(
            MemoryPixels::<DEFAULT_PIXEL_COUNT>::new(),
            channel.receiver(),
            &config(),
        );

        sender
            .try_send(PixelCommand::StartRainbow(Duration::from_millis(10)))
            .unwrap();
        scheduler.tick(Instant::from_millis(0));
        scheduler.tick(Instant::from_millis(10));
        assert_eq!(scheduler.animation().map(|a| a.current_step()), Some(2));

        sender.try_send(PixelCommand::StopAnimation).unwrap();
        let result = scheduler.tick(Instant::from_millis(20));
        assert!(!scheduler.is_animating());
        assert_eq!(result.sleep_duration, IDLE);
        assert_eq!(scheduler.pixels().shows(), 2);
    }

    #[test]
    fn test_drawing_commands_cancel_animation() {
        let channel = CommandChannel::<4>::new();
        let sender = channel.sender();
        let mut scheduler = PixelScheduler::new(
            MemoryPixels::<DEFAULT_PIXEL_COUNT>::new(),
            channel.receiver(),
            &config(),
        );

        sender
            .try_send(PixelCommand::StartRainbow(Duration::from_millis(10)))
            .unwrap();
        scheduler.tick(Instant::from_millis(0));

        sender
            .try_send(PixelCommand::FillZone(ZoneId::SmallRing, Color::RED))
            .unwrap();
        scheduler.tick(Instant::from_millis(10));

        assert!(!scheduler.is_animating());
        let pixels = scheduler.pixels();
        assert_eq!(pixels.writes_per_show, vec![44, 12]);
        assert!(pixels.colors[24..36].iter().all(|color| *color == Color::RED));
    }

    #[test]
    fn test_brightness_fill_and_clear_commands() {
        let channel = CommandChannel::<4>::new();
        let sender = channel.sender();
        let mut scheduler = PixelScheduler::new(
            MemoryPixels::<DEFAULT_PIXEL_COUNT>::new(),
            channel.receiver(),
            &config(),
        );

        sender.try_send(PixelCommand::SetBrightness(0.3)).unwrap();
        sender.try_send(PixelCommand::FillAll(Color::BLUE)).unwrap();
        scheduler.tick(Instant::from_millis(0));

        assert_eq!(scheduler.pixels().brightness, Some(0.3));
        assert!(scheduler.pixels().colors.iter().all(|color| *color == Color::BLUE));

        sender.try_send(PixelCommand::Clear).unwrap();
        scheduler.tick(Instant::from_millis(50));
        assert!(scheduler.pixels().colors.iter().all(|color| color.is_black()));
        assert_eq!(scheduler.pixels().writes_per_show, vec![44, 44]);
    }

    #[test]
    fn test_start_rainbow_after_fill_in_same_batch() {
        let channel = CommandChannel::<4>::new();
        let sender = channel.sender();
        let mut scheduler = PixelScheduler::new(
            MemoryPixels::<DEFAULT_PIXEL_COUNT>::new(),
            channel.receiver(),
            &config(),
        );

        sender.try_send(PixelCommand::FillAll(Color::WHITE)).unwrap();
        sender
            .try_send(PixelCommand::StartRainbow(Duration::from_millis(10)))
            .unwrap();
        scheduler.tick(Instant::from_millis(0));

        assert!(scheduler.is_animating());
        assert_eq!(scheduler.pixels().shows(), 2);
    }
}
