use crate::{Namespace, ProviderDescriptor, SqlProvider};
use std::fmt::{self, Display};

/// Standard operations of the declarative CRUD catalogue.
///
/// This is a declaration surface only: it names the operations a generator
/// provider is expected to expose and builds the namespaced descriptor the
/// dispatcher resolves. Generating the SQL itself is the provider's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CrudOperation {
    Save,
    SaveAll,
    FindById,
    FindOne,
    FindList,
    FindByExample,
    Count,
    DeleteById,
    DeleteAll,
    Clear,
    Update,
}

impl CrudOperation {
    /// Every standard operation.
    pub const ALL: [CrudOperation; 11] = [
        CrudOperation::Save,
        CrudOperation::SaveAll,
        CrudOperation::FindById,
        CrudOperation::FindOne,
        CrudOperation::FindList,
        CrudOperation::FindByExample,
        CrudOperation::Count,
        CrudOperation::DeleteById,
        CrudOperation::DeleteAll,
        CrudOperation::Clear,
        CrudOperation::Update,
    ];

    /// Provider operation name this catalogue entry resolves against.
    pub const fn name(&self) -> &'static str {
        match self {
            CrudOperation::Save => "save",
            CrudOperation::SaveAll => "save_all",
            CrudOperation::FindById => "find_by_id",
            CrudOperation::FindOne => "find_one",
            CrudOperation::FindList => "find_list",
            CrudOperation::FindByExample => "find_by_example",
            CrudOperation::Count => "count",
            CrudOperation::DeleteById => "delete_by_id",
            CrudOperation::DeleteAll => "delete_all",
            CrudOperation::Clear => "clear",
            CrudOperation::Update => "update",
        }
    }

    /// Catalogue entry from its operation name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.name() == name)
    }

    /// Descriptor targeting this operation on generator provider `P`, on
    /// behalf of `namespace`. CRUD generators are namespace aware, so the
    /// owning context is mandatory here.
    pub fn descriptor<P: SqlProvider>(&self, namespace: impl Into<Namespace>) -> ProviderDescriptor {
        ProviderDescriptor::new::<P>(self.name()).with_namespace(namespace)
    }
}

impl Display for CrudOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
