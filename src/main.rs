use floatfield::{FieldFormUI, FloatingTextField, OutputOptions, StyleKind, emit};

type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
    let report = FieldFormUI::new()
        .with_title("Create account")
        .with_field(FloatingTextField::create_with_placeholder("Name"))
        .with_fields(
            [StyleKind::Email, StyleKind::Phone, StyleKind::Password]
                .into_iter()
                .map(FloatingTextField::create_with_style),
        )
        .run()?;

    emit(&report, &OutputOptions::default())?;
    Ok(())
}
