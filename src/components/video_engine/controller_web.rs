// Web controller: boot the embedded engine, consume its notifications, run
// the 1s poll loop, and forward document-level keyboard and fullscreen
// events into the same control operations the buttons use.

#[cfg(target_arch = "wasm32")]
fn boot_engine(engine: &EngineHandle, on_ready: &JsValue, on_state_change: &JsValue) {
    if let Some(player) =
        construct_engine_player(&VideoConfig::default(), on_ready, on_state_change)
    {
        engine.attach(player);
    }
}

#[cfg(target_arch = "wasm32")]
#[component]
pub fn VideoController() -> Element {
    let engine = use_context::<EngineHandle>();
    let engine_ready = use_context::<EngineReadySignal>().0;
    let playback_state = use_context::<PlaybackStateSignal>().0;
    let progress = use_context::<ProgressSignal>().0;
    let current_time = use_context::<CurrentTimeSignal>().0;
    let duration = use_context::<DurationSignal>().0;
    let volume = use_context::<VolumeSignal>().0;
    let muted = use_context::<MutedSignal>().0;
    let fullscreen = use_context::<FullscreenSignal>().0;

    thread_local! {
        // Caller invariant: the adapter initializes exactly once per engine
        // lifetime. Re-running the setup would double-register listeners.
        static LISTENERS_INSTALLED: Cell<bool> = const { Cell::new(false) };
        static ENGINE_BOOTED: Cell<bool> = const { Cell::new(false) };
        // Starting a new poll loop supersedes any prior one; the flag stops
        // the loop on page unload so no tick runs against torn-down DOM.
        static POLL_GENERATION: Cell<u64> = const { Cell::new(0) };
        static POLL_ACTIVE: Cell<bool> = const { Cell::new(true) };
    }

    // One-time boot: inject the API script and hand the engine its ready and
    // state-change callbacks.
    {
        let engine = engine.clone();
        use_effect(move || {
            if ENGINE_BOOTED.with(|c| c.get()) {
                return;
            }
            ENGINE_BOOTED.with(|c| c.set(true));

            let Some(win) = window() else {
                return;
            };
            let runtime = Runtime::current();

            let on_ready = {
                let engine = engine.clone();
                let runtime = runtime.clone();
                let mut engine_ready = engine_ready.clone();
                Closure::wrap(Box::new(move |_event: JsValue| {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    engine.mark_ready();
                    engine_ready.set(true);
                }) as Box<dyn FnMut(JsValue)>)
            };

            let on_state_change = {
                let engine = engine.clone();
                let runtime = runtime.clone();
                let mut playback_state = playback_state.clone();
                let mut current_time = current_time.clone();
                let mut duration = duration.clone();
                Closure::wrap(Box::new(move |event: JsValue| {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    let code = Reflect::get(&event, &JsValue::from_str("data"))
                        .ok()
                        .and_then(|value| value.as_f64())
                        .unwrap_or(-1.0) as i32;
                    playback_state.set(PlaybackState::from_code(code));
                    current_time.set(engine.current_time());
                    duration.set(engine.duration());
                }) as Box<dyn FnMut(JsValue)>)
            };

            ensure_iframe_api_script();

            if engine_api_loaded() {
                // Script was already on the page (hot reload); boot directly.
                boot_engine(&engine, on_ready.as_ref(), on_state_change.as_ref());
            } else {
                let api_ready = {
                    let engine = engine.clone();
                    let on_ready = on_ready.as_ref().clone();
                    let on_state_change = on_state_change.as_ref().clone();
                    Closure::wrap(Box::new(move || {
                        boot_engine(&engine, &on_ready, &on_state_change);
                    }) as Box<dyn FnMut()>)
                };
                if let Err(err) = Reflect::set(
                    &win,
                    &JsValue::from_str("onYouTubeIframeAPIReady"),
                    api_ready.as_ref(),
                ) {
                    log_engine_warning("api ready hook", &err);
                }
                api_ready.forget();
            }

            on_ready.forget();
            on_state_change.forget();
        });
    }

    // Engine-ready initialization: sync the initial volume icon state, attach
    // the document-level bindings, and start the poll timer.
    use_effect(move || {
        if !engine_ready() || !engine.is_ready() {
            return;
        }
        if LISTENERS_INSTALLED.with(|c| c.get()) {
            return;
        }
        LISTENERS_INSTALLED.with(|c| c.set(true));

        let mut volume = volume.clone();
        let mut muted = muted.clone();
        volume.set(engine.volume());
        muted.set(engine.muted());

        let Some(win) = window() else {
            return;
        };
        let Some(doc) = win.document() else {
            return;
        };
        let runtime = Runtime::current();

        let key_cb = {
            let engine = engine.clone();
            let runtime = runtime.clone();
            let mut volume = volume.clone();
            Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if event.default_prevented() || is_editable_shortcut_target(&event) {
                    return;
                }
                let Some(action) = control_action_for_code(&event.code()) else {
                    return;
                };
                event.prevent_default();
                let _guard = RuntimeGuard::new(runtime.clone());
                match action {
                    ControlAction::TogglePlayPause => {
                        click_player_control_button("play-pause-btn");
                    }
                    ControlAction::ToggleFullscreen => {
                        click_player_control_button("fullscreen-btn");
                    }
                    ControlAction::SeekBy(offset) => engine.seek_by(offset),
                    ControlAction::VolumeBy(delta) => {
                        let next = stepped_volume(*volume.peek(), delta);
                        volume.set(next);
                        engine.set_volume(next);
                    }
                }
            }) as Box<dyn FnMut(KeyboardEvent)>)
        };
        let _ = doc.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
        key_cb.forget();

        // The fullscreen icon follows the document's notification, whichever
        // code path (or browser chrome) triggered the transition.
        for event_name in FULLSCREEN_CHANGE_EVENTS {
            let runtime = runtime.clone();
            let mut fullscreen = fullscreen.clone();
            let change_cb = Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                fullscreen.set(fullscreen_active());
            }) as Box<dyn FnMut()>);
            let _ = doc
                .add_event_listener_with_callback(event_name, change_cb.as_ref().unchecked_ref());
            change_cb.forget();
        }

        let unload_cb = Closure::wrap(Box::new(move || {
            POLL_ACTIVE.with(|c| c.set(false));
        }) as Box<dyn FnMut()>);
        let _ =
            win.add_event_listener_with_callback("beforeunload", unload_cb.as_ref().unchecked_ref());
        unload_cb.forget();

        let generation = POLL_GENERATION.with(|c| {
            let next = c.get() + 1;
            c.set(next);
            next
        });
        let engine = engine.clone();
        let mut progress = progress.clone();
        let mut current_time = current_time.clone();
        let mut duration = duration.clone();
        spawn(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(1_000).await;
                if !POLL_ACTIVE.with(|c| c.get())
                    || POLL_GENERATION.with(|c| c.get()) != generation
                {
                    break;
                }

                let time = engine.current_time();
                let dur = engine.duration();
                // No duration yet means no meaningful percentage; skip the
                // tick rather than writing NaN into the slider.
                let Some(pct) = progress_percent(time, dur) else {
                    continue;
                };
                progress.set(pct);
                current_time.set(time);
                duration.set(dur);
            }
        });
    });

    rsx! {}
}
