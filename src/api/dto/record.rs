//! DTOs for the record service.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::domain::entities::{Record, RecordFields, RecordFilter};

/// Body of `POST /api/v1/records` and `PUT /api/v1/records/{recordID}`.
///
/// `noOfStudents` may be sent as a number or as a numeric string, as HTML
/// form values arrive.
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRequest {
    #[serde(alias = "Name")]
    pub name: String,

    #[serde(alias = "RoleOfContact")]
    pub role_of_contact: String,

    #[serde(alias = "NoOfStudents")]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub no_of_students: i32,

    #[serde(alias = "AcadYr")]
    pub acad_yr: String,

    #[serde(alias = "CapstoneTitle")]
    pub capstone_title: String,

    #[serde(alias = "CompanyName")]
    pub company_name: String,

    #[serde(alias = "CompanyContact")]
    pub company_contact: String,

    #[serde(alias = "ProjDesc")]
    pub proj_desc: String,
}

impl From<RecordRequest> for RecordFields {
    fn from(request: RecordRequest) -> Self {
        RecordFields {
            name: request.name,
            role_of_contact: request.role_of_contact,
            no_of_students: request.no_of_students,
            acad_yr: request.acad_yr,
            capstone_title: request.capstone_title,
            company_name: request.company_name,
            company_contact: request.company_contact,
            proj_desc: request.proj_desc,
        }
    }
}

/// Query of `DELETE /api/v1/records/delete`.
#[derive(Debug, Deserialize)]
pub struct RecordIdQuery {
    #[serde(rename = "recordID")]
    pub record_id: Option<String>,
}

/// Query of `GET /api/v1/records/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRecordsQuery {
    #[serde(rename = "acadYr")]
    pub acad_yr: Option<String>,
    pub keyword: Option<String>,
}

impl From<SearchRecordsQuery> for RecordFilter {
    fn from(query: SearchRecordsQuery) -> Self {
        RecordFilter::new(query.acad_yr, query.keyword)
    }
}

/// Record as returned by the list and search endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResponse {
    pub record_id: i64,
    pub name: String,
    pub role_of_contact: String,
    pub no_of_students: i32,
    pub acad_yr: String,
    pub capstone_title: String,
    pub company_name: String,
    pub company_contact: String,
    pub proj_desc: String,
}

impl From<Record> for RecordResponse {
    fn from(record: Record) -> Self {
        let fields = record.fields;
        Self {
            record_id: record.id,
            name: fields.name,
            role_of_contact: fields.role_of_contact,
            no_of_students: fields.no_of_students,
            acad_yr: fields.acad_yr,
            capstone_title: fields.capstone_title,
            company_name: fields.company_name,
            company_contact: fields.company_contact,
            proj_desc: fields.proj_desc,
        }
    }
}
