//! User-facing text catalogue.
//!
//! Spanish is the default because the hosted service's own UI is Spanish;
//! English is kept alongside it for development hosts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            other => Err(format!("unknown locale `{other}`")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::Es => "es",
            Locale::En => "en",
        })
    }
}

/// Every string the client shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    // notices
    LoadFailed,
    Created,
    CreateFailed,
    Saved,
    UpdateFailed,
    Deleted,
    DeleteFailed,
    StateUpdated,
    StateFailed,
    ReadFailed,
    ItemLoadFailed,
    TitleTooShort,
    DescriptionTooShort,
    EditTitleTooShort,
    EditDescriptionTooShort,
    // table
    EmptyList,
    Untitled,
    MarkDone,
    MarkOpen,
    Edit,
    Delete,
    // controls
    SearchPlaceholder,
    FilterAll,
    FilterOpen,
    FilterDone,
    TitleLabel,
    DescriptionLabel,
    CompletedLabel,
    Add,
    Save,
    Cancel,
    EditHeading,
}

impl Locale {
    pub fn text(self, text: Text) -> &'static str {
        match self {
            Locale::Es => spanish(text),
            Locale::En => english(text),
        }
    }
}

fn spanish(text: Text) -> &'static str {
    match text {
        Text::LoadFailed => "No se pudieron cargar las tareas.",
        Text::Created => "Tarea creada.",
        Text::CreateFailed => "No se pudo crear.",
        Text::Saved => "Cambios guardados.",
        Text::UpdateFailed => "No se pudo actualizar.",
        Text::Deleted => "Eliminada.",
        Text::DeleteFailed => "No se pudo eliminar.",
        Text::StateUpdated => "Estado actualizado.",
        Text::StateFailed => "No se pudo cambiar estado.",
        Text::ReadFailed => "No se pudo leer.",
        Text::ItemLoadFailed => "No se pudo cargar la tarea.",
        Text::TitleTooShort => "El título debe tener al menos 3 caracteres.",
        Text::DescriptionTooShort => "La descripción debe tener al menos 3 caracteres.",
        Text::EditTitleTooShort => "El título (edición) debe tener al menos 3 caracteres.",
        Text::EditDescriptionTooShort => {
            "La descripción (edición) debe tener al menos 3 caracteres."
        }
        Text::EmptyList => "No hay tareas. Crea una nueva usando el formulario superior.",
        Text::Untitled => "(sin título)",
        Text::MarkDone => "Marcar hecha",
        Text::MarkOpen => "Marcar pendiente",
        Text::Edit => "Editar",
        Text::Delete => "Eliminar",
        Text::SearchPlaceholder => "Buscar por título o descripción",
        Text::FilterAll => "Todas",
        Text::FilterOpen => "Pendientes",
        Text::FilterDone => "Hechas",
        Text::TitleLabel => "Título",
        Text::DescriptionLabel => "Descripción",
        Text::CompletedLabel => "Completada",
        Text::Add => "Agregar",
        Text::Save => "Guardar",
        Text::Cancel => "Cancelar",
        Text::EditHeading => "Editar tarea",
    }
}

fn english(text: Text) -> &'static str {
    match text {
        Text::LoadFailed => "Could not load the tasks.",
        Text::Created => "Task created.",
        Text::CreateFailed => "Could not create the task.",
        Text::Saved => "Changes saved.",
        Text::UpdateFailed => "Could not update the task.",
        Text::Deleted => "Deleted.",
        Text::DeleteFailed => "Could not delete the task.",
        Text::StateUpdated => "Status updated.",
        Text::StateFailed => "Could not change the status.",
        Text::ReadFailed => "Could not read the task.",
        Text::ItemLoadFailed => "Could not load the task.",
        Text::TitleTooShort => "The title must be at least 3 characters long.",
        Text::DescriptionTooShort => "The description must be at least 3 characters long.",
        Text::EditTitleTooShort => "The title (edit) must be at least 3 characters long.",
        Text::EditDescriptionTooShort => {
            "The description (edit) must be at least 3 characters long."
        }
        Text::EmptyList => "No tasks yet. Create one with the form above.",
        Text::Untitled => "(untitled)",
        Text::MarkDone => "Mark done",
        Text::MarkOpen => "Mark open",
        Text::Edit => "Edit",
        Text::Delete => "Delete",
        Text::SearchPlaceholder => "Search title or description",
        Text::FilterAll => "All",
        Text::FilterOpen => "Open",
        Text::FilterDone => "Done",
        Text::TitleLabel => "Title",
        Text::DescriptionLabel => "Description",
        Text::CompletedLabel => "Completed",
        Text::Add => "Add",
        Text::Save => "Save",
        Text::Cancel => "Cancel",
        Text::EditHeading => "Edit task",
    }
}
