//! Native NSWindow tweaks for the HUD on macOS
//!
//! winit cannot make a window follow every Space or sit over full-screen
//! apps, and its windows activate the app when clicked. The HUD window is
//! found by title, turned into a non-activating panel and configured directly.

use objc2::runtime::{AnyClass, AnyObject, NSObject, NSObjectProtocol};
use objc2::{define_class, ClassType, MainThreadMarker, MainThreadOnly};
use objc2_app_kit::{
    NSApplication, NSPanel, NSResponder, NSWindow, NSWindowCollectionBehavior, NSWindowStyleMask,
};
use tracing::{debug, info, warn};

define_class!(
    /// Panel that takes keyboard input without becoming the main window
    #[unsafe(super(NSPanel, NSWindow, NSResponder, NSObject))]
    #[thread_kind = MainThreadOnly]
    #[name = "DupelyHudPanel"]
    struct HudPanel;

    unsafe impl NSObjectProtocol for HudPanel {}

    impl HudPanel {
        #[unsafe(method(canBecomeKeyWindow))]
        fn can_become_key_window(&self) -> bool {
            true
        }

        #[unsafe(method(canBecomeMainWindow))]
        fn can_become_main_window(&self) -> bool {
            false
        }
    }
);

/// Style mask of the HUD once it is a non-activating panel
fn panel_style_mask(current: NSWindowStyleMask) -> NSWindowStyleMask {
    current | NSWindowStyleMask::NonactivatingPanel
}

/// Swap the winit window's class for [`HudPanel`] so clicks and typing in
/// the HUD never activate the app. Returns false if it already was a panel.
#[allow(unused_unsafe)]
fn make_non_activating(window: &NSWindow) -> bool {
    let panel_class: &AnyClass = HudPanel::class();
    if std::ptr::eq(AnyObject::class(window), panel_class) {
        return false;
    }

    unsafe {
        // HudPanel must stay ivar-free: the instance layout cannot change
        objc2::ffi::object_setClass(
            window as *const NSWindow as *mut AnyObject,
            panel_class as *const AnyClass,
        );
        window.setStyleMask(panel_style_mask(window.styleMask()));
    }

    if let Some(panel) = window.downcast_ref::<NSPanel>() {
        unsafe { panel.setFloatingPanel(true) };
    }

    true
}

/// Native state to apply to the HUD panel
#[derive(Debug, Clone, Copy)]
pub struct PanelOptions {
    pub visible: bool,
    pub across_spaces: bool,
}

/// Configure the window titled `title`. Returns false if it does not exist yet.
#[allow(unused_unsafe)]
pub fn apply_panel_options(title: &str, options: PanelOptions) -> bool {
    let Some(mtm) = MainThreadMarker::new() else {
        warn!("HUD panel options must be applied on the main thread");
        return false;
    };

    let app = NSApplication::sharedApplication(mtm);
    let windows = unsafe { app.windows() };

    for index in 0..windows.count() {
        let window = unsafe { windows.objectAtIndex(index) };
        if unsafe { window.title() }.to_string() != title {
            continue;
        }

        if make_non_activating(&window) {
            info!("HUD window converted to a non-activating panel");
        }

        unsafe {
            if options.across_spaces {
                window.setCollectionBehavior(
                    NSWindowCollectionBehavior::CanJoinAllSpaces
                        | NSWindowCollectionBehavior::FullScreenAuxiliary
                        | NSWindowCollectionBehavior::Stationary,
                );
            }
            window.setHidesOnDeactivate(false);
            window.setMovableByWindowBackground(true);

            if options.visible {
                window.orderFront(None);
            } else {
                window.orderOut(None);
            }
        }

        debug!(
            "Applied HUD panel options (visible: {}, across spaces: {})",
            options.visible, options.across_spaces
        );
        return true;
    }

    false
}
