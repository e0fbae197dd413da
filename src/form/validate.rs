//! Client-side validation for the contact form.

/// The four named fields the contact form submits.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Nombre,
    Correo,
    Telefono,
    Mensaje,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Nombre, Field::Correo, Field::Telefono, Field::Mensaje];

    /// Wire name, used both as the payload key and the error-slot key.
    pub fn name(self) -> &'static str {
        match self {
            Field::Nombre => "nombre",
            Field::Correo => "correo",
            Field::Telefono => "telefono",
            Field::Mensaje => "mensaje",
        }
    }
}

/// Current values of the contact form.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct FormFields {
    pub nombre: String,
    pub correo: String,
    pub telefono: String,
    pub mensaje: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Nombre => &self.nombre,
            Field::Correo => &self.correo,
            Field::Telefono => &self.telefono,
            Field::Mensaje => &self.mensaje,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Nombre => self.nombre = value,
            Field::Correo => self.correo = value,
            Field::Telefono => self.telefono = value,
            Field::Mensaje => self.mensaje = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Per-field error messages from the latest validation pass.
#[derive(Default, PartialEq, Debug)]
pub struct FieldErrors {
    nombre: Option<&'static str>,
    correo: Option<&'static str>,
    telefono: Option<&'static str>,
    mensaje: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Nombre => self.nombre,
            Field::Correo => self.correo,
            Field::Telefono => self.telefono,
            Field::Mensaje => self.mensaje,
        }
    }

    fn set(&mut self, field: Field, message: &'static str) {
        let slot = match field {
            Field::Nombre => &mut self.nombre,
            Field::Correo => &mut self.correo,
            Field::Telefono => &mut self.telefono,
            Field::Mensaje => &mut self.mensaje,
        };
        *slot = Some(message);
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }
}

/// Pragmatic email filter: one `@` between non-blank parts, and a `.` in the
/// domain. Intentionally looser than the RFC.
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if !is_plain(local) || !is_plain(domain) {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((head, tld)) => is_plain(head) && is_plain(tld),
        None => false,
    }
}

fn is_plain(part: &str) -> bool {
    !part.is_empty() && !part.chars().any(char::is_whitespace)
}

/// True iff the trimmed value is a fully typed `+56 9 DDDD DDDD` number.
pub fn is_valid_phone(value: &str) -> bool {
    let Some(rest) = value.trim().strip_prefix("+56 9 ") else {
        return false;
    };

    let mut blocks = rest.split(' ');
    let (Some(first), Some(second), None) = (blocks.next(), blocks.next(), blocks.next()) else {
        return false;
    };

    is_digit_block(first) && is_digit_block(second)
}

fn is_digit_block(block: &str) -> bool {
    block.len() == 4 && block.chars().all(|c| c.is_ascii_digit())
}

/// Checks every field independently so the user sees all problems at once.
pub fn validate(fields: &FormFields) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if fields.nombre.trim().is_empty() {
        errors.set(Field::Nombre, "Ingresa tu nombre.");
    }

    let correo = fields.correo.trim();
    if correo.is_empty() {
        errors.set(Field::Correo, "Ingresa tu correo.");
    } else if !is_valid_email(correo) {
        errors.set(Field::Correo, "Ingresa un correo válido.");
    }

    let telefono = fields.telefono.trim();
    if telefono.is_empty() {
        errors.set(Field::Telefono, "Ingresa tu teléfono.");
    } else if !is_valid_phone(telefono) {
        errors.set(Field::Telefono, "Ingresa un teléfono válido.");
    }

    if fields.mensaje.trim().is_empty() {
        errors.set(Field::Mensaje, "Ingresa tu mensaje.");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::phone;

    #[test]
    fn email_accepts_minimal_address() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("ana.perez@example.com"));
        // The bar is intentionally permissive.
        assert!(is_valid_email("a..b@c..d"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("sin-arroba.cl"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email("an a@b.c"));
        assert!(!is_valid_email("ana@b c.d"));
    }

    #[test]
    fn phone_accepts_canonical_shape_only() {
        assert!(is_valid_phone("+56 9 1234 5678"));
        assert!(is_valid_phone("  +56 9 1234 5678  "));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("+56 9 1234"));
        assert!(!is_valid_phone("+56 9 1234 567"));
        assert!(!is_valid_phone("+56 9 1234 56789"));
        assert!(!is_valid_phone("56 9 1234 5678"));
        assert!(!is_valid_phone("+56 9 1234 567a"));
    }

    #[test]
    fn formatter_output_with_full_subscriber_number_is_valid() {
        for raw in ["987654321", "56912345678", "0911112222", "+56 9 4444 5555"] {
            assert!(is_valid_phone(&phone::format(raw)));
        }
    }

    #[test]
    fn empty_form_annotates_every_field() {
        let errors = validate(&FormFields::default());
        for field in Field::ALL {
            assert!(errors.get(field).is_some(), "{} sin error", field.name());
        }
        assert!(!errors.is_empty());
    }

    #[test]
    fn well_formed_fields_pass_clean() {
        let fields = FormFields {
            nombre: "Ana".into(),
            correo: "ana@example.com".into(),
            telefono: "+56 9 1234 5678".into(),
            mensaje: "Hola".into(),
        };
        assert!(validate(&fields).is_empty());
    }

    #[test]
    fn format_errors_do_not_short_circuit() {
        let fields = FormFields {
            nombre: "Ana".into(),
            correo: "no-es-correo".into(),
            telefono: "+56 9 12".into(),
            mensaje: String::new(),
        };
        let errors = validate(&fields);
        assert_eq!(errors.get(Field::Nombre), None);
        assert_eq!(errors.get(Field::Correo), Some("Ingresa un correo válido."));
        assert_eq!(errors.get(Field::Telefono), Some("Ingresa un teléfono válido."));
        assert_eq!(errors.get(Field::Mensaje), Some("Ingresa tu mensaje."));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let fields = FormFields {
            nombre: "   ".into(),
            correo: "\t".into(),
            telefono: " ".into(),
            mensaje: "\n".into(),
        };
        let errors = validate(&fields);
        assert_eq!(errors.get(Field::Nombre), Some("Ingresa tu nombre."));
        assert_eq!(errors.get(Field::Correo), Some("Ingresa tu correo."));
        assert_eq!(errors.get(Field::Telefono), Some("Ingresa tu teléfono."));
        assert_eq!(errors.get(Field::Mensaje), Some("Ingresa tu mensaje."));
    }
}
