/*
 * Public entry point of the Win32 layer. `DialogInterface` prepares the
 * process (common controls, module instance) and runs the modal tab dialog,
 * owning the `DialogContext` for exactly as long as the dialog lives.
 */

use crate::config::DialogConfig;
use crate::controller::TabDialog;
use crate::dialog_template::main_dialog_template;
use crate::error::{DialogError, Result as DialogResult};
use crate::types::CommandId;
use crate::window_common::{DialogContext, main_dialog_proc};

use windows::Win32::{
    Foundation::{GetLastError, HINSTANCE, LPARAM},
    System::LibraryLoader::GetModuleHandleW,
    UI::Controls::{ICC_TAB_CLASSES, INITCOMMONCONTROLSEX, InitCommonControlsEx},
    UI::WindowsAndMessaging::{DLGTEMPLATE, DialogBoxIndirectParamW},
};

pub struct DialogInterface {
    h_instance: HINSTANCE,
    config: DialogConfig,
}

impl DialogInterface {
    pub fn new(config: DialogConfig) -> DialogResult<Self> {
        config.validate()?;
        init_common_controls()?;
        let h_instance: HINSTANCE = unsafe { GetModuleHandleW(None) }?.into();
        log::debug!("[App] Dialog interface ready, hInstance {h_instance:?}");
        Ok(Self { h_instance, config })
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    /// Shows the dialog and blocks until it is closed. Returns the command the
    /// dialog ended with.
    pub fn run_modal(&self) -> DialogResult<CommandId> {
        let template = main_dialog_template(&self.config);
        let context = Box::new(DialogContext {
            controller: TabDialog::new(&self.config)?,
            config: self.config.clone(),
            h_instance: self.h_instance,
        });
        let context_ptr = Box::into_raw(context);

        log::debug!("[App] Running modal dialog '{}'", self.config.title);
        let ret = unsafe {
            DialogBoxIndirectParamW(
                Some(self.h_instance),
                template.as_ptr() as *const DLGTEMPLATE,
                None,
                Some(main_dialog_proc),
                LPARAM(context_ptr as isize),
            )
        };

        // The dialog has been destroyed; nothing references the context any more.
        let context = unsafe { Box::from_raw(context_ptr) };

        if ret == -1 {
            let err = unsafe { GetLastError() };
            log::error!("[App] DialogBoxIndirectParamW failed: {err:?}");
            return Err(DialogError::InitializationFailed(format!(
                "DialogBoxIndirectParamW failed: {err:?}"
            )));
        }

        let result = CommandId::from_raw(ret as i32);
        if context.controller.result() != Some(result) {
            log::warn!(
                "[App] Dialog returned {result:?} but the controller recorded {:?}",
                context.controller.result()
            );
        }
        log::debug!(
            "[App] Dialog closed with {result:?}; quit posted: {}",
            context.controller.quit_posted()
        );
        Ok(result)
    }
}

fn init_common_controls() -> DialogResult<()> {
    let icc = INITCOMMONCONTROLSEX {
        dwSize: std::mem::size_of::<INITCOMMONCONTROLSEX>() as u32,
        dwICC: ICC_TAB_CLASSES,
    };
    if unsafe { InitCommonControlsEx(&icc) }.as_bool() {
        Ok(())
    } else {
        Err(DialogError::InitializationFailed(
            "InitCommonControlsEx(ICC_TAB_CLASSES) failed".into(),
        ))
    }
}
