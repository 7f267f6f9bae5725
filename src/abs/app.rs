//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application,
//! and [`run`], which drives an [`Application`] through its lifecycle.

use std::sync::Arc;
use std::time::Instant;

use glow::HasContext;

use crate::config::AppInfo;
use crate::lifecycle::Application;

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Creates a new [`App`] instance as described by `info`.
    /// The window size is ignored if `info.flags.fullscreen` is set.
    pub fn new(info: &AppInfo) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video_subsystem = sdl.video()?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(info.major_version, info.minor_version);
        if info.samples > 0 {
            gl_attr.set_multisample_buffers(1);
            gl_attr.set_multisample_samples(info.samples);
        }
        if info.flags.debug {
            gl_attr.set_context_flags().debug().set();
        }

        let mut window = video_subsystem
            .window(&info.title, info.window_width, info.window_height)
            .opengl()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;
        if info.flags.fullscreen {
            window.set_fullscreen(sdl2::video::FullscreenType::Desktop)?;
        }

        let gl_context = window.gl_create_context()?;
        window.gl_make_current(&gl_context)?;

        let swap_interval = if info.flags.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(swap_interval) {
            log::warn!("could not set swap interval: {e}");
        }
        sdl.mouse().show_cursor(info.flags.cursor);

        let mut gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        if info.flags.debug {
            if gl.supports_debug() {
                unsafe {
                    gl.enable(glow::DEBUG_OUTPUT);
                    gl.enable(glow::DEBUG_OUTPUT_SYNCHRONOUS);
                    gl.debug_message_callback(forward_debug_message);
                }
            } else {
                log::warn!("debug output requested but not supported by this context");
            }
        }

        let (width, height) = window.size();
        let version = gl.version();
        log::info!(
            "created {}x{} window with OpenGL {}.{}",
            width,
            height,
            version.major,
            version.minor
        );

        let event_pump = sdl.event_pump()?;
        let gl = Arc::new(gl);

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl,
            event_pump,
        })
    }
}

/// Maps a GL debug severity onto a log level.
pub fn debug_level(severity: u32) -> log::Level {
    match severity {
        glow::DEBUG_SEVERITY_HIGH => log::Level::Error,
        glow::DEBUG_SEVERITY_MEDIUM => log::Level::Warn,
        glow::DEBUG_SEVERITY_LOW => log::Level::Info,
        _ => log::Level::Debug,
    }
}

fn forward_debug_message(source: u32, kind: u32, id: u32, severity: u32, message: &str) {
    log::log!(
        target: "gl",
        debug_level(severity),
        "source 0x{source:04X}, type 0x{kind:04X}, id {id}: {message}"
    );
}

/// Opens a window for `application` and runs it until the window is closed.
///
/// `name` selects the config overrides file, see [`AppInfo::apply_overrides_for`].
pub fn run<A: Application<glow::Context>>(mut application: A, name: &str) -> Result<(), String> {
    let mut info = AppInfo::default();
    application.init(&mut info);
    info.apply_overrides_for(name);

    let mut app = App::new(&info)?;
    application.startup(&app.gl)?;

    let start = Instant::now();
    'running: loop {
        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(width, height),
                    ..
                } => unsafe {
                    app.gl.viewport(0, 0, width, height);
                },
                _ => {}
            }
        }

        application.render(start.elapsed().as_secs_f64());
        app.window.gl_swap_window();
    }

    application.shutdown();
    log::info!("{} closed", info.title);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_levels() {
        assert_eq!(debug_level(glow::DEBUG_SEVERITY_HIGH), log::Level::Error);
        assert_eq!(debug_level(glow::DEBUG_SEVERITY_MEDIUM), log::Level::Warn);
        assert_eq!(debug_level(glow::DEBUG_SEVERITY_LOW), log::Level::Info);
        assert_eq!(
            debug_level(glow::DEBUG_SEVERITY_NOTIFICATION),
            log::Level::Debug
        );
    }
}
