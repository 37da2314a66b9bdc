use crate::remote::Resource;

/// The API family a resource belongs to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ApiStem {
    Core,
    Payroll,
    File,
    Assets
}

impl ApiStem {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiStem::Core => "core",
            ApiStem::Payroll => "payroll",
            ApiStem::File => "file",
            ApiStem::Assets => "assets"
        }
    }

    /// Versioned path prefix of the API family.
    pub fn base_path(&self) -> &'static str {
        match self {
            ApiStem::Core => "api.xro/2.0",
            ApiStem::Payroll => "payroll.xro/1.0",
            ApiStem::File => "files.xro/1.0",
            ApiStem::Assets => "assets.xro/1.0"
        }
    }
}

/// Builds the endpoint path for the resource collection, or for one record when `guid` is given.
pub fn resource_path<R: Resource>(guid: Option<&str>) -> String {
    let collection = format!("{}/{}", R::api_stem().base_path(), R::resource_uri());

    match guid {
        Some(guid) => format!("{collection}/{guid}"),
        None => collection
    }
}
