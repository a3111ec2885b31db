//! Lookup Resources
//!
//! The orderable lookup tables and where each one lives on the backend.

/// One orderable lookup table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LookupResource {
    #[default]
    LicensingAgencies,
    Infringements,
    ProjectStatus,
    DocumentCategories,
}

impl LookupResource {
    /// Menu order
    pub const ALL: [LookupResource; 4] = [
        LookupResource::LicensingAgencies,
        LookupResource::Infringements,
        LookupResource::ProjectStatus,
        LookupResource::DocumentCategories,
    ];

    /// Collection path relative to the API base URL
    pub fn path(self) -> &'static str {
        match self {
            LookupResource::LicensingAgencies => "licensings/agencies",
            LookupResource::Infringements => "licensings/infringements",
            LookupResource::ProjectStatus => "projects/status",
            LookupResource::DocumentCategories => "documents/categories",
        }
    }

    /// Field holding the display text
    pub fn label_key(self) -> &'static str {
        match self {
            LookupResource::LicensingAgencies => "department",
            _ => "name",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LookupResource::LicensingAgencies => "Licensing agencies",
            LookupResource::Infringements => "Infringement types",
            LookupResource::ProjectStatus => "Project status",
            LookupResource::DocumentCategories => "Document categories",
        }
    }
}
