use common::error::GatewayResult;
use common::form::FieldChange;
use common::model::cql_library::CqlLibrary;
use common::model::elm::ElmTranslation;
use common::model::organization::Organization;
use common::validation::Field;
use uuid::Uuid;

pub enum Msg {
    Loaded(GatewayResult<CqlLibrary>),
    OrganizationsLoaded(GatewayResult<Vec<Organization>>),
    Edit(FieldChange),
    Blur(Field),
    /// Debounce tick for CQL validation run `seq`.
    ValidateCql(u64),
    Translated(u64, GatewayResult<ElmTranslation>),
    Submit,
    Saved(GatewayResult<CqlLibrary>),
    Cancel,
    ResumeEditing,
    DiscardChanges,
    DismissToast(Uuid),
}
