//! Unit and headless-App tests for the power bar.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use bevy_egui::egui;

    use rendering::bar_renderer::RecordingRenderer;
    use rendering::chrome::{
        ChromeImage, ChromeProvider, LEFT_INDICATOR, SIDEBAR_BITS, SIDEBAR_BITS_LAYOUT,
        SIDEBAR_BITS_SIZE,
    };
    use simulation::player::LocalPlayer;
    use simulation::power::{PowerLookup, PowerManager, PowerModel, PowerState};
    use simulation::SimulationPlugin;

    use crate::power_bar::{
        bar_color, power_scale, smooth, spawn_power_bar, tooltip_text, PowerBarConfig,
        PowerBarError, PowerBarHover, PowerBarWidget, ANIM_RATE, COLOR_CRITICAL, COLOR_LOW,
        COLOR_NORMAL,
    };
    use crate::tooltip_container::{TooltipContainers, DEFAULT_TOOLTIP_CONTAINER, SIMPLE_TOOLTIP};

    const EPS: f32 = 1e-5;

    /// Model whose values can be changed between frames.
    #[derive(Default)]
    struct TestModel {
        provided: f32,
        drained: f32,
        state: PowerState,
    }

    impl TestModel {
        fn new(provided: f32, drained: f32) -> Self {
            Self {
                provided,
                drained,
                state: PowerState::Normal,
            }
        }
    }

    impl PowerModel for TestModel {
        fn power_provided(&self) -> f32 {
            self.provided
        }
        fn power_drained(&self) -> f32 {
            self.drained
        }
        fn power_state(&self) -> PowerState {
            self.state
        }
    }

    struct SingleActor {
        actor: Entity,
        pm: PowerManager,
    }

    impl PowerLookup for SingleActor {
        fn power_model(&self, actor: Entity) -> Option<&dyn PowerModel> {
            (actor == self.actor).then_some(&self.pm as &dyn PowerModel)
        }
    }

    fn chrome() -> ChromeProvider {
        let mut chrome = ChromeProvider::default();
        chrome.register_sheet(
            SIDEBAR_BITS,
            None,
            egui::TextureId::Managed(1),
            SIDEBAR_BITS_SIZE,
            SIDEBAR_BITS_LAYOUT,
        );
        chrome
    }

    fn bounds() -> egui::Rect {
        // 20 wide, 200 tall, bottom at y=300.
        egui::Rect::from_min_size(egui::pos2(10.0, 100.0), egui::vec2(20.0, 200.0))
    }

    fn widget() -> PowerBarWidget {
        PowerBarWidget::for_actor(Entity::PLACEHOLDER, &PowerBarConfig::default())
    }

    fn widget_without_tooltip() -> PowerBarWidget {
        let config = PowerBarConfig {
            tooltip_container: None,
            ..Default::default()
        };
        PowerBarWidget::for_actor(Entity::PLACEHOLDER, &config)
    }

    fn containers() -> TooltipContainers {
        let mut c = TooltipContainers::default();
        c.register(DEFAULT_TOOLTIP_CONTAINER);
        c
    }

    // -------------------------------------------------------------------------
    // Scale selection
    // -------------------------------------------------------------------------

    #[test]
    fn test_scale_starts_at_base() {
        assert_eq!(power_scale(0.0, 0.0), 100.0);
        assert_eq!(power_scale(99.9, 12.0), 100.0);
    }

    #[test]
    fn test_scale_doubles_when_reached() {
        assert_eq!(power_scale(100.0, 0.0), 200.0);
        assert_eq!(power_scale(150.0, 0.0), 200.0);
        assert_eq!(power_scale(0.0, 400.0), 800.0);
        assert_eq!(power_scale(1000.0, 30.0), 1600.0);
    }

    #[test]
    fn test_scale_exceeds_both_values_and_is_power_of_two_multiple() {
        let samples = [0.0, 1.0, 50.0, 99.0, 100.0, 101.0, 333.3, 1024.0, 12_800.0, 1e6];
        for &provided in &samples {
            for &drained in &samples {
                let scale = power_scale(provided, drained);
                assert!(scale > provided.max(drained), "{provided}/{drained} -> {scale}");
                assert!(scale >= 100.0);
                let mut base = scale;
                while base > 100.0 {
                    base /= 2.0;
                }
                assert_eq!(base, 100.0, "{scale} is not 100 * 2^n");
            }
        }
    }

    #[test]
    fn test_scale_terminates_on_non_finite_input() {
        assert!(power_scale(f32::INFINITY, 0.0).is_infinite());
        assert_eq!(power_scale(f32::NAN, f32::NAN), 100.0);
    }

    // -------------------------------------------------------------------------
    // Smoothing and color
    // -------------------------------------------------------------------------

    #[test]
    fn test_smooth_first_frame_is_target() {
        assert_eq!(smooth(None, 0.42), 0.42);
    }

    #[test]
    fn test_smooth_moves_thirty_percent() {
        let p = 0.2;
        let t = 0.7;
        let next = smooth(Some(p), t);
        assert!((next - (p + ANIM_RATE * (t - p))).abs() < EPS);
        assert!((next - 0.35).abs() < EPS);
    }

    #[test]
    fn test_smooth_converges_without_overshoot() {
        for (start, target) in [(0.0_f32, 0.9_f32), (0.9, 0.1)] {
            let mut value = start;
            let mut last_gap = (target - value).abs();
            for _ in 0..60 {
                value = smooth(Some(value), target);
                let gap = (target - value).abs();
                assert!(gap <= last_gap);
                // Never crosses the target.
                assert!((value - target).signum() == (start - target).signum() || gap < EPS);
                last_gap = gap;
            }
            assert!(last_gap < 1e-4, "did not converge: {value} vs {target}");
        }
    }

    #[test]
    fn test_bar_color_by_state() {
        assert_eq!(bar_color(PowerState::Critical), COLOR_CRITICAL);
        assert_eq!(bar_color(PowerState::Low), COLOR_LOW);
        assert_eq!(bar_color(PowerState::Normal), COLOR_NORMAL);
        assert_eq!(COLOR_CRITICAL, egui::Color32::from_rgb(255, 0, 0));
        assert_eq!(COLOR_LOW, egui::Color32::from_rgb(255, 165, 0));
        assert_eq!(COLOR_NORMAL, egui::Color32::from_rgb(50, 205, 50));
    }

    #[test]
    fn test_tooltip_text_format() {
        let model = TestModel::new(150.0, 80.5);
        assert_eq!(tooltip_text(&model), "Power Usage: 150/80.5");
    }

    // -------------------------------------------------------------------------
    // Draw
    // -------------------------------------------------------------------------

    #[test]
    fn test_first_draw_has_no_lag() {
        let mut w = widget();
        let mut r = RecordingRenderer::default();
        w.draw(&TestModel::new(50.0, 30.0), bounds(), &chrome(), &mut r);

        let (p, d) = w.smoothed_fractions();
        assert!((p.unwrap_or_default() - 0.5).abs() < EPS);
        assert!((d.unwrap_or_default() - 0.3).abs() < EPS);

        // Converged inputs stay put on the next frame.
        w.draw(&TestModel::new(50.0, 30.0), bounds(), &chrome(), &mut r);
        let (p, d) = w.smoothed_fractions();
        assert!((p.unwrap_or_default() - 0.5).abs() < EPS);
        assert!((d.unwrap_or_default() - 0.3).abs() < EPS);
    }

    #[test]
    fn test_draw_issues_bar_then_indicator() {
        let mut w = widget();
        let mut r = RecordingRenderer::default();
        w.draw(&TestModel::new(50.0, 30.0), bounds(), &chrome(), &mut r);

        let rects = r.filled_rects();
        assert_eq!(rects.len(), 1);
        let (rect, color) = rects[0];
        assert_eq!(color, COLOR_NORMAL);
        // Full width, from the bottom (300) up to half height (200).
        assert!((rect.left() - 10.0).abs() < EPS);
        assert!((rect.right() - 30.0).abs() < EPS);
        assert!((rect.bottom() - 300.0).abs() < EPS);
        assert!((rect.top() - 200.0).abs() < EPS);

        let sprites = r.sprite_positions();
        assert_eq!(sprites.len(), 1);
        // Flush with the right edge: 30 - 12 px indicator width.
        assert!((sprites[0].x - 18.0).abs() < EPS);
        // 30% of the way up from 300 to 100.
        assert!((sprites[0].y - 240.0).abs() < EPS);
    }

    #[test]
    fn test_draw_rescales_above_base() {
        let mut w = widget();
        let mut r = RecordingRenderer::default();
        w.draw(&TestModel::new(150.0, 0.0), bounds(), &chrome(), &mut r);

        let (p, d) = w.smoothed_fractions();
        assert!((p.unwrap_or_default() - 0.75).abs() < EPS);
        assert!(d.unwrap_or_default().abs() < EPS);
        let (rect, _) = r.filled_rects()[0];
        assert!((rect.height() - 150.0).abs() < 1e-3);
        // Zero drain sits the indicator on the bottom edge.
        assert!((r.sprite_positions()[0].y - 300.0).abs() < EPS);
    }

    #[test]
    fn test_draw_animates_towards_new_target() {
        let mut w = widget();
        let mut r = RecordingRenderer::default();
        w.draw(&TestModel::new(20.0, 10.0), bounds(), &chrome(), &mut r);
        w.draw(&TestModel::new(80.0, 60.0), bounds(), &chrome(), &mut r);

        let (p, d) = w.smoothed_fractions();
        assert!((p.unwrap_or_default() - (0.2 + 0.3 * 0.6)).abs() < EPS);
        assert!((d.unwrap_or_default() - (0.1 + 0.3 * 0.5)).abs() < EPS);
    }

    #[test]
    fn test_draw_color_follows_state_not_fractions() {
        let mut w = widget();
        let mut r = RecordingRenderer::default();
        let mut model = TestModel::new(10.0, 90.0);
        for (state, color) in [
            (PowerState::Critical, COLOR_CRITICAL),
            (PowerState::Low, COLOR_LOW),
            (PowerState::Normal, COLOR_NORMAL),
        ] {
            model.state = state;
            r.clear();
            w.draw(&model, bounds(), &chrome(), &mut r);
            assert_eq!(r.filled_rects()[0].1, color);
        }
    }

    #[test]
    fn test_draw_without_indicator_still_draws_bar() {
        let mut w = widget();
        let mut r = RecordingRenderer::default();
        w.draw(
            &TestModel::new(50.0, 30.0),
            bounds(),
            &ChromeProvider::default(),
            &mut r,
        );
        assert_eq!(r.filled_rects().len(), 1);
        assert!(r.sprite_positions().is_empty());
        assert!(w.smoothed_fractions().1.is_some());
    }

    #[test]
    fn test_draw_uses_configured_indicator() {
        let config = PowerBarConfig {
            indicator_sheet: "custom".to_string(),
            indicator_image: "marker".to_string(),
            ..Default::default()
        };
        let mut w = PowerBarWidget::for_actor(Entity::PLACEHOLDER, &config);
        let mut chrome = ChromeProvider::default();
        chrome.insert(
            "custom",
            "marker",
            ChromeImage::whole(egui::TextureId::Managed(9), egui::vec2(4.0, 4.0)),
        );
        let mut r = RecordingRenderer::default();
        w.draw(&TestModel::new(0.0, 0.0), bounds(), &chrome, &mut r);
        assert!((r.sprite_positions()[0].x - 26.0).abs() < EPS);
        assert!(chrome.get_image(SIDEBAR_BITS, LEFT_INDICATOR).is_none());
    }

    // -------------------------------------------------------------------------
    // Tooltip
    // -------------------------------------------------------------------------

    #[test]
    fn test_pointer_enter_registers_live_tooltip() {
        let actor = Entity::from_raw(5);
        let w = PowerBarWidget::for_actor(actor, &PowerBarConfig::default());
        let mut tooltips = containers();
        w.pointer_entered(&mut tooltips);

        let active = tooltips
            .get(DEFAULT_TOOLTIP_CONTAINER)
            .and_then(|c| c.active())
            .expect("tooltip registered");
        assert_eq!(active.template, SIMPLE_TOOLTIP);

        // Text reflects the model when rendered, not when hovered.
        let mut lookup = SingleActor {
            actor,
            pm: PowerManager::new(100.0, 40.0),
        };
        assert_eq!(active.args.text(&lookup), "Power Usage: 100/40");
        lookup.pm.set_levels(250.0, 300.0);
        assert_eq!(active.args.text(&lookup), "Power Usage: 250/300");
    }

    #[test]
    fn test_pointer_exit_removes_tooltip() {
        let w = widget();
        let mut tooltips = containers();
        w.pointer_entered(&mut tooltips);
        w.pointer_exited(&mut tooltips);
        assert!(tooltips
            .get(DEFAULT_TOOLTIP_CONTAINER)
            .and_then(|c| c.active())
            .is_none());
    }

    #[test]
    fn test_pointer_events_noop_without_container() {
        let w = widget_without_tooltip();
        let mut tooltips = containers();
        w.pointer_entered(&mut tooltips);
        assert_eq!(tooltips.active_tooltips().count(), 0);

        // A tooltip set by someone else is left alone on exit.
        if let Some(c) = tooltips.get_mut(DEFAULT_TOOLTIP_CONTAINER) {
            c.set_tooltip(
                SIMPLE_TOOLTIP,
                crate::tooltip_container::TooltipArgs::new(|_| "other".to_string()),
            );
        }
        w.pointer_exited(&mut tooltips);
        assert_eq!(tooltips.active_tooltips().count(), 1);
    }

    #[test]
    fn test_pointer_enter_unknown_container_is_ignored() {
        let config = PowerBarConfig {
            tooltip_container: Some("MISSING".to_string()),
            ..Default::default()
        };
        let w = PowerBarWidget::for_actor(Entity::PLACEHOLDER, &config);
        let mut tooltips = containers();
        w.pointer_entered(&mut tooltips);
        w.pointer_exited(&mut tooltips);
        assert_eq!(tooltips.active_tooltips().count(), 0);
    }

    #[test]
    fn test_hover_forwards_edges_only() {
        let w = widget();
        let mut tooltips = containers();
        let mut hover = PowerBarHover::default();

        hover.update(true, &w, &mut tooltips);
        assert!(hover.hovered);
        assert_eq!(tooltips.active_tooltips().count(), 1);

        // Staying hovered doesn't re-register; leaving clears.
        hover.update(true, &w, &mut tooltips);
        assert_eq!(tooltips.active_tooltips().count(), 1);
        hover.update(false, &w, &mut tooltips);
        assert!(!hover.hovered);
        assert_eq!(tooltips.active_tooltips().count(), 0);
    }

    // -------------------------------------------------------------------------
    // Config
    // -------------------------------------------------------------------------

    #[test]
    fn test_config_defaults() {
        let config = PowerBarConfig::default();
        assert_eq!(config.tooltip_template, SIMPLE_TOOLTIP);
        assert_eq!(
            config.tooltip_container.as_deref(),
            Some(DEFAULT_TOOLTIP_CONTAINER)
        );
        assert_eq!(config.indicator_sheet, SIDEBAR_BITS);
        assert_eq!(config.indicator_image, LEFT_INDICATOR);
    }

    #[test]
    fn test_config_partial_json_fills_defaults() {
        let config =
            PowerBarConfig::from_json_str(r#"{ "tooltip_container": null, "size": [16.0, 120.0] }"#)
                .expect("valid config");
        assert!(config.tooltip_container.is_none());
        assert_eq!(config.size, [16.0, 120.0]);
        assert_eq!(config.tooltip_template, SIMPLE_TOOLTIP);
    }

    #[test]
    fn test_config_invalid_json_is_error() {
        let err = PowerBarConfig::from_json_str(r#"{ "size": "tall" }"#).unwrap_err();
        assert!(matches!(err, PowerBarError::Config(_)));
    }

    #[test]
    fn test_config_load_missing_file_is_io_error() {
        let err = PowerBarConfig::load("/definitely/not/here/powerbar.json").unwrap_err();
        assert!(matches!(err, PowerBarError::Io(_)));
    }

    // -------------------------------------------------------------------------
    // Construction in a headless App
    // -------------------------------------------------------------------------

    fn power_bar_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);
        app.init_resource::<PowerBarConfig>();
        app.add_systems(PostStartup, spawn_power_bar);
        app
    }

    #[test]
    fn test_new_binds_local_player() {
        let mut app = power_bar_app();
        app.update();

        let local = *app.world().resource::<LocalPlayer>();
        let bars: Vec<Entity> = app
            .world_mut()
            .query::<&PowerBarWidget>()
            .iter(app.world())
            .map(|w| w.power_actor())
            .collect();
        assert_eq!(bars, vec![local.actor]);
        assert!(app.should_exit().is_none());
    }

    #[test]
    fn test_new_without_local_player_fails() {
        let world = World::new();
        let err = PowerBarWidget::new(&world, &PowerBarConfig::default()).unwrap_err();
        assert!(matches!(err, PowerBarError::NoLocalPlayer));
    }

    #[test]
    fn test_new_without_power_manager_fails() {
        let mut world = World::new();
        let actor = world.spawn_empty().id();
        world.insert_resource(LocalPlayer { actor });
        let err = PowerBarWidget::new(&world, &PowerBarConfig::default()).unwrap_err();
        assert!(matches!(err, PowerBarError::MissingPowerManager(e) if e == actor));
    }

    #[test]
    fn test_spawn_failure_requests_exit() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_systems(PostStartup, spawn_power_bar);
        app.update();

        assert!(app.should_exit().is_some());
        let count = app
            .world_mut()
            .query::<&PowerBarWidget>()
            .iter(app.world())
            .count();
        assert_eq!(count, 0);
    }
}
