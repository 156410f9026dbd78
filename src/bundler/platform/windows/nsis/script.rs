//! NSI script generation.

use super::{template::NSI_TEMPLATE, utils};
use crate::bundler::{descriptor::AppDescriptor, error::Result};
use handlebars::Handlebars;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// Renders the installer script for `app` into `output_dir/installer.nsi`.
pub async fn generate_nsi_script(
    app: &AppDescriptor,
    executable: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let nsi_content = render(app, executable)?;
    let nsi_path = output_dir.join("installer.nsi");
    utils::write_utf8_bom(&nsi_path, &nsi_content).await?;
    Ok(nsi_path)
}

fn render(app: &AppDescriptor, executable: &str) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.register_template_string("installer.nsi", NSI_TEMPLATE)?;

    let mut data = BTreeMap::new();
    data.insert("product_name", utils::escape(app.product_name()));
    data.insert("app_name", utils::escape(app.name()));
    data.insert("version", utils::escape(&app.version().to_string()));
    data.insert("version_nsis", utils::format_version_for_nsis(app.version()));
    data.insert("publisher", utils::escape(app.company_name()));
    data.insert("copyright", utils::escape(app.copyright()));
    data.insert("executable", utils::escape(executable));
    data.insert(
        "source_dir",
        utils::escape(&app.dir().join("*").display().to_string()),
    );
    if app.icon().is_file() {
        data.insert("icon", utils::escape(&app.icon().display().to_string()));
    }

    Ok(handlebars.render("installer.nsi", &data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{
        Platform,
        settings::{Arch, PackageSettings, SettingsBuilder},
    };

    fn windows_app() -> AppDescriptor {
        windows_app_for(PackageSettings {
            name: "LiveStyle".into(),
            product_name: "Emmet LiveStyle".into(),
            company: "Emmet.io".into(),
            version: semver::Version::new(1, 2, 0),
            ..Default::default()
        })
    }

    fn windows_app_for(package: PackageSettings) -> AppDescriptor {
        let settings = SettingsBuilder::new()
            .project_dir("/work/livestyle")
            .platform(Platform::Win32)
            .arch(Arch::X86_64)
            .runtime_version(semver::Version::new(0, 36, 2))
            .package_settings(package)
            .build()
            .unwrap();
        AppDescriptor::from_settings(&settings).with_dir("/work/livestyle/dist/livestyle")
    }

    #[test]
    fn test_render_fills_metadata() {
        let script = render(&windows_app(), "livestyle.exe").unwrap();
        assert!(script.contains("!define PRODUCT_NAME \"Emmet LiveStyle\""));
        assert!(script.contains("!define MAIN_EXE \"livestyle.exe\""));
        assert!(script.contains("VIProductVersion \"1.2.0.0\""));
        assert!(script.contains("!define PUBLISHER \"Emmet.io\""));
        assert!(script.contains("$LOCALAPPDATA\\${APP_NAME}"));
        // Icon lines are skipped when the icon file does not exist.
        assert!(!script.contains("UninstallIcon"));
    }

    #[test]
    fn test_render_escapes_quotes_and_dollars() {
        let app = windows_app_for(PackageSettings {
            name: "LiveStyle".into(),
            product_name: "LiveStyle \"Pro\"".into(),
            company: "$PROFILE Inc".into(),
            copyright: "Copyright \"$PROFILE\"".into(),
            version: semver::Version::new(1, 2, 0),
            ..Default::default()
        });
        let script = render(&app, "livestyle.exe").unwrap();
        assert!(script.contains(r#"!define PRODUCT_NAME "LiveStyle $\"Pro$\"""#));
        assert!(script.contains(r#"!define PUBLISHER "$$PROFILE Inc""#));
        assert!(script.contains(r#""LegalCopyright" "Copyright $\"$$PROFILE$\"""#));
    }
}
