mod input;
mod render;
mod store;

use glam::{Vec2, Vec3};
use input::{GestureKeys, KeyAction, MouseState, OrbitState};
use render::GpuState;
use std::time::Instant;
use store::FileStore;
use tree_core::{
    FrameClock, FrameInput, FrameOutput, GestureEvent, PhotoGallery, PresetLoader, Scene,
    SceneMode, SpiralPath, MAX_FRAME_DT_SEC, PRESET_AUTOLOAD_DELAY_SEC,
};
use winit::event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

const RIBBON_BEADS: usize = 120;

/// Everything the frame loop owns besides the GPU.
struct App {
    scene: Scene,
    clock: FrameClock,
    mouse: MouseState,
    orbit: OrbitState,
    hand_follow: bool,
    gesture_keys: GestureKeys,
    pending: Vec<GestureEvent>,
    gallery: PhotoGallery,
    presets: PresetLoader,
    store: FileStore,
    ribbon: Vec<Vec3>,
    elapsed: f32,
}

impl App {
    fn new(store: FileStore) -> Self {
        Self {
            scene: Scene::from_entropy(),
            clock: FrameClock::new(MAX_FRAME_DT_SEC),
            mouse: MouseState::default(),
            orbit: OrbitState::default(),
            hand_follow: false,
            gesture_keys: GestureKeys::default(),
            pending: Vec::new(),
            gallery: PhotoGallery::default(),
            presets: PresetLoader::default(),
            store,
            ribbon: SpiralPath::default().points(RIBBON_BEADS),
            elapsed: 0.0,
        }
    }

    fn on_key(&mut self, action: KeyAction, pressed: bool, repeat: bool) {
        match action {
            KeyAction::Gesture(g) => {
                if let Some(edge) = self.gesture_keys.key(g, pressed) {
                    self.pending.push(edge);
                }
            }
            _ if !pressed || repeat => {}
            KeyAction::ToggleHandFollow => {
                self.hand_follow = !self.hand_follow;
                let state = if self.hand_follow { "on" } else { "off" };
                log::info!("[input] hand follow {}", state);
            }
            KeyAction::AddPresets => {
                match self.presets.add_all_presets(&mut self.store, &mut self.gallery) {
                    Ok(n) => log::info!("[photos] added {} presets", n),
                    Err(e) => log::warn!("[photos] could not record presets: {}", e),
                }
            }
            KeyAction::ClearPhotos => {
                if let Err(e) = self.presets.clear(&mut self.store, &mut self.gallery) {
                    log::warn!("[photos] clear failed: {}", e);
                }
            }
        }
    }

    fn on_mouse_button(&mut self, state: ElementState) {
        let at = Vec2::new(self.mouse.x, self.mouse.y);
        match state {
            ElementState::Pressed => {
                self.mouse.down = true;
                self.orbit.begin_drag(at);
            }
            ElementState::Released => {
                self.mouse.down = false;
                self.orbit.end_drag();
            }
        }
    }

    fn on_cursor(&mut self, x: f32, y: f32) {
        self.mouse.x = x;
        self.mouse.y = y;
        self.mouse.inside = true;
        self.orbit.drag_to(Vec2::new(x, y));
    }

    fn frame(&mut self, width: u32, height: u32) -> FrameOutput {
        let dt = self.clock.tick(Instant::now());
        self.elapsed += dt;

        if self.elapsed >= PRESET_AUTOLOAD_DELAY_SEC {
            if let Err(e) = self.presets.load_if_needed(&mut self.store, &mut self.gallery) {
                log::warn!("[photos] preset autoload failed: {}", e);
            }
        }

        let pointer = if self.hand_follow {
            input::pointer_uv(&self.mouse, width, height)
        } else {
            None
        };
        match pointer {
            Some(uv) if self.scene.mode() == SceneMode::Galaxy => {
                self.orbit.angles = input::orbit_from_pointer(uv);
            }
            _ => self.orbit.auto_rotate(dt),
        }

        let out = self.scene.frame(&FrameInput {
            gestures: self.pending.drain(..).collect(),
            pointer,
            orbit: self.orbit.angles,
            dt,
            photo_count: self.gallery.len(),
        });
        if out.apex_reached {
            log::info!("[overlay] apex in focus, showing greeting");
        }
        out
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let store = FileStore::open_or_empty(store::default_prefs_path());
    log::info!("[prefs] using {}", store.path().display());
    let mut app = App::new(store);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Spiral Tree: Tree")
        .build(&event_loop)?;
    let mut gpu = pollster::block_on(GpuState::new(&window))?;
    let mut last_mode = SceneMode::Tree;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state,
                        repeat,
                        ..
                    },
                ..
            } => {
                let pressed = state == ElementState::Pressed;
                match logical_key {
                    Key::Named(NamedKey::Escape) if pressed => elwt.exit(),
                    Key::Character(c) => {
                        if let Some(action) = input::action_for_key(c.as_str()) {
                            app.on_key(action, pressed, repeat);
                        }
                    }
                    _ => {}
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                app.on_cursor(position.x as f32, position.y as f32)
            }
            WindowEvent::CursorLeft { .. } => app.mouse.inside = false,
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => app.on_mouse_button(state),
            _ => {}
        },
        Event::AboutToWait => {
            let (w, h) = gpu.size();
            let out = app.frame(w, h);
            if out.mode != last_mode {
                gpu.window.set_title(&format!("Spiral Tree: {:?}", out.mode));
                last_mode = out.mode;
            }
            let instances =
                render::build_instances(&app.ribbon, &out, app.gallery.len(), app.elapsed);
            match gpu.render(&out.pose, &instances) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        Event::LoopExiting => log::info!("[app] shutting down"),
        _ => {}
    })?;
    Ok(())
}
