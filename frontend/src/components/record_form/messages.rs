use common::request::{AdminContact, CompanyOption};

pub enum Msg {
    SetField(String, String),
    ChoosePeriod(i64),
    SetCompanySearch(String),
    /// Company picked by id from the dropdown; empty id clears the pair.
    ChooseCompany(String),
    /// Manager picked by nickname; empty pick clears name and phone.
    ChooseManager(String),
    CompaniesLoaded(Vec<CompanyOption>),
    AdminsLoaded(Vec<AdminContact>),
    /// Result of the fire-and-forget next-company-id lookup.
    CompanyIdAssigned(String),
}
