//! DTOs for decoding people-API JSON responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into the
//! domain [`Profile`] in one pass. Every field is optional and unknown keys
//! are ignored, so a body only fails to decode when it is not JSON or a
//! present value has the wrong type.

use serde::Deserialize;

use crate::domain::{
    Company, Country, CurrentShare, Location, PictureUrls, Position, Positions, Profile,
    ProfileDate, ProfileRequest,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ProfileDto {
    pub(super) id: Option<String>,
    pub(super) first_name: Option<String>,
    pub(super) last_name: Option<String>,
    pub(super) maiden_name: Option<String>,
    pub(super) formatted_name: Option<String>,
    pub(super) phonetic_first_name: Option<String>,
    pub(super) phonetic_last_name: Option<String>,
    pub(super) formatted_phonetic_name: Option<String>,
    pub(super) headline: Option<String>,
    pub(super) industry: Option<String>,
    pub(super) num_connections: Option<u32>,
    pub(super) num_connections_capped: Option<bool>,
    pub(super) summary: Option<String>,
    pub(super) specialties: Option<String>,
    pub(super) positions: Option<CollectionDto<PositionDto>>,
    pub(super) picture_url: Option<String>,
    pub(super) picture_urls: Option<CollectionDto<String>>,
    pub(super) public_profile_url: Option<String>,
    pub(super) email_address: Option<String>,
    pub(super) location: Option<LocationDto>,
    pub(super) site_standard_profile_request: Option<ProfileRequestDto>,
    pub(super) api_standard_profile_request: Option<ProfileRequestDto>,
    pub(super) current_share: Option<CurrentShareDto>,
}

/// `{"_total": n, "values": [...]}` wrapper used for every collection.
#[derive(Debug, Deserialize)]
pub(super) struct CollectionDto<T> {
    #[serde(rename = "_total")]
    pub(super) total: Option<u32>,
    pub(super) values: Option<Vec<T>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PositionDto {
    pub(super) id: Option<i64>,
    pub(super) is_current: Option<bool>,
    pub(super) title: Option<String>,
    pub(super) summary: Option<String>,
    pub(super) location: Option<LocationDto>,
    pub(super) start_date: Option<DateDto>,
    pub(super) end_date: Option<DateDto>,
    pub(super) company: Option<CompanyDto>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct CompanyDto {
    pub(super) id: Option<i64>,
    pub(super) industry: Option<String>,
    pub(super) name: Option<String>,
    pub(super) size: Option<String>,
    #[serde(rename = "type")]
    pub(super) company_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct LocationDto {
    pub(super) name: Option<String>,
    pub(super) country: Option<CountryDto>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct CountryDto {
    pub(super) name: Option<String>,
    pub(super) code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct DateDto {
    pub(super) month: Option<u32>,
    pub(super) year: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ProfileRequestDto {
    pub(super) url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct CurrentShareDto {
    pub(super) id: Option<String>,
    pub(super) timestamp: Option<i64>,
    pub(super) comment: Option<String>,
}

impl ProfileDto {
    pub(super) fn into_domain(self) -> Profile {
        Profile {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            maiden_name: self.maiden_name,
            formatted_name: self.formatted_name,
            phonetic_first_name: self.phonetic_first_name,
            phonetic_last_name: self.phonetic_last_name,
            formatted_phonetic_name: self.formatted_phonetic_name,
            headline: self.headline,
            industry: self.industry,
            num_connections: self.num_connections,
            num_connections_capped: self.num_connections_capped,
            summary: self.summary,
            specialties: self.specialties,
            positions: self.positions.map(|positions| Positions {
                total: positions.total,
                values: positions
                    .values
                    .unwrap_or_default()
                    .into_iter()
                    .map(PositionDto::into_domain)
                    .collect(),
            }),
            picture_url: self.picture_url,
            picture_urls: self.picture_urls.map(|pictures| PictureUrls {
                total: pictures.total,
                urls: pictures.values.unwrap_or_default(),
            }),
            public_profile_url: self.public_profile_url,
            email_address: self.email_address,
            location: self.location.map(LocationDto::into_domain),
            site_standard_profile_request: self
                .site_standard_profile_request
                .map(ProfileRequestDto::into_domain),
            api_standard_profile_request: self
                .api_standard_profile_request
                .map(ProfileRequestDto::into_domain),
            current_share: self.current_share.map(CurrentShareDto::into_domain),
        }
    }
}

impl PositionDto {
    fn into_domain(self) -> Position {
        Position {
            id: self.id,
            is_current: self.is_current,
            title: self.title,
            summary: self.summary,
            location: self.location.map(LocationDto::into_domain),
            start_date: self.start_date.map(DateDto::into_domain),
            end_date: self.end_date.map(DateDto::into_domain),
            company: self.company.map(CompanyDto::into_domain),
        }
    }
}

impl CompanyDto {
    fn into_domain(self) -> Company {
        Company {
            id: self.id,
            industry: self.industry,
            name: self.name,
            size: self.size,
            company_type: self.company_type,
        }
    }
}

impl LocationDto {
    fn into_domain(self) -> Location {
        Location {
            name: self.name,
            country: self.country.map(|country| Country {
                name: country.name,
                code: country.code,
            }),
        }
    }
}

impl DateDto {
    const fn into_domain(self) -> ProfileDate {
        ProfileDate {
            month: self.month,
            year: self.year,
        }
    }
}

impl ProfileRequestDto {
    fn into_domain(self) -> ProfileRequest {
        ProfileRequest { url: self.url }
    }
}

impl CurrentShareDto {
    fn into_domain(self) -> CurrentShare {
        CurrentShare {
            id: self.id,
            timestamp: self.timestamp,
            comment: self.comment,
        }
    }
}
