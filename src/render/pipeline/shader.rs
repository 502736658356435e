//! Shader module creation with compile diagnostics

use crate::core::error::Error;
use crate::core::types::Result;

/// Compile WGSL source, logging every diagnostic
///
/// Creation runs inside a validation error scope so a bad shader surfaces as
/// `Error::Shader` rather than reaching the device's uncaptured-error handler.
pub fn create_shader(device: &wgpu::Device, label: &str, source: &str) -> Result<wgpu::ShaderModule> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    let validation = pollster::block_on(scope.pop());

    let info = pollster::block_on(module.get_compilation_info());
    check_messages(label, &info.messages)?;

    if let Some(e) = validation {
        log::error!("Shader {} failed validation: {}", label, e);
        return Err(Error::Shader {
            label: label.to_string(),
            message: e.to_string(),
        });
    }
    log::debug!("Compiled shader {}", label);
    Ok(module)
}

/// Log compiler messages and fold any errors into `Error::Shader`
pub(crate) fn check_messages(label: &str, messages: &[wgpu::CompilationMessage]) -> Result<()> {
    let mut errors = Vec::new();
    for message in messages {
        let location = message.location.as_ref()
            .map(|loc| format!("{}:{}", loc.line_number, loc.line_position))
            .unwrap_or_default();
        match message.message_type {
            wgpu::CompilationMessageType::Error => {
                log::error!("Shader {} {}: {}", label, location, message.message);
                errors.push(format!("{} {}", location, message.message).trim().to_string());
            }
            wgpu::CompilationMessageType::Warning => {
                log::warn!("Shader {} {}: {}", label, location, message.message);
            }
            wgpu::CompilationMessageType::Info => {
                log::info!("Shader {} {}: {}", label, location, message.message);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Shader {
            label: label.to_string(),
            message: errors.join("; "),
        })
    }
}
