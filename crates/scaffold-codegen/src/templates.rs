//! Embedded Java templates.

use scaffold_core::{ScaffoldError, ScaffoldResult};
use tera::Tera;

pub const ENTITY: &str = "module/entity.java";
pub const DTO: &str = "module/dto.java";
pub const MAPPER: &str = "module/mapper.java";
pub const REPOSITORY: &str = "module/repository.java";
pub const SERVICE: &str = "module/service.java";
pub const CONTROLLER: &str = "module/controller.java";

pub const UNIT_TEST: &str = "tests/unit_test.java";
pub const WEB_TEST: &str = "tests/web_test.java";

pub const APPLICATION: &str = "project/application.java";
pub const COMPONENT: &str = "project/component.java";
pub const SETTINGS_GRADLE: &str = "project/settings.gradle";

/// Fixed files written verbatim into every bootstrapped project.
pub const BUILD_GRADLE: &str = include_str!("templates/project/build.gradle");
pub const APPLICATION_YML: &str = include_str!("templates/project/application.yml");

/// Compile every template. Autoescaping is off: the output is Java, and
/// every substituted value has already passed the naming rules.
pub fn engine() -> ScaffoldResult<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (ENTITY, include_str!("templates/module/entity.java.tera")),
        (DTO, include_str!("templates/module/dto.java.tera")),
        (MAPPER, include_str!("templates/module/mapper.java.tera")),
        (REPOSITORY, include_str!("templates/module/repository.java.tera")),
        (SERVICE, include_str!("templates/module/service.java.tera")),
        (CONTROLLER, include_str!("templates/module/controller.java.tera")),
        (UNIT_TEST, include_str!("templates/tests/unit_test.java.tera")),
        (WEB_TEST, include_str!("templates/tests/web_test.java.tera")),
        (APPLICATION, include_str!("templates/project/application.java.tera")),
        (COMPONENT, include_str!("templates/project/component.java.tera")),
        (SETTINGS_GRADLE, include_str!("templates/project/settings.gradle.tera")),
    ])
    .map_err(ScaffoldError::template)?;
    tera.autoescape_on(vec![]);
    Ok(tera)
}

/// Render a template, flattening tera's error chain into the message.
pub fn render(tera: &Tera, name: &str, context: &tera::Context) -> ScaffoldResult<String> {
    tera.render(name, context).map_err(|e| {
        let mut message = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        ScaffoldError::Template(message)
    })
}
