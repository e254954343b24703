//! The built-in field dictionary: canonical field names and the regex
//! patterns that identify them.
//!
//! Patterns are matched case-insensitively against raw evidence text; the
//! same patterns also seed the fuzzy-match synonym vocabulary (see
//! [`crate::synonyms`]). Declaration order is preserved so iteration and
//! serialized listings are stable across runs.

use std::sync::Arc;

use regex::{Regex, RegexBuilder};

use crate::errors::FieldprobeError;
use crate::synonyms::derive_synonyms;

/// Canonical fields and their identifying patterns, in declaration order.
///
/// Covers personal info, address, document upload, social profile,
/// authentication, search, job search, e-commerce, content, button, SSO,
/// opt-in, company, legal, demographic, and education fields.
pub static FIELD_PATTERNS: &[(&str, &[&str])] = &[
    // personal info
    (
        "first_name",
        &[
            r"^first[\s_-]?name$",
            r"^fname$",
            r"^given[\s_-]?name$",
            r"^forename$",
            r"^first$",
            r".*first.*name.*",
        ],
    ),
    (
        "last_name",
        &[
            r"^last[\s_-]?name$",
            r"^lname$",
            r"^surname$",
            r"^family[\s_-]?name$",
            r"^last$",
            r".*last.*name.*",
        ],
    ),
    (
        "fullname",
        &[
            r"^fullname$",
            r"^full[-_]name$",
            r"^name$",
            r"^applicant[-_]fullname$",
            r"^applicant[-_]name$",
            r"^[A-Z][a-z]+_name_[a-zA-Z0-9]+$",
            r".*name.*input.*field.*",
        ],
    ),
    (
        "email",
        &[
            r"^email$",
            r"^e[-]?mail$",
            r"^emailaddress$",
            r"^user[_-]?email$",
            r"^mail$",
            r"^email[-_]bem$",
            r".*__input--email$",
            r"^input[-_]email[-_][a-z0-9]{5,8}$",
            r"^data[-_]email$",
            r"^react[-_]email$",
            r".*Email_.*\d+$",
            r".*email.*field.*control.*",
        ],
    ),
    (
        "phone",
        &[
            r"^phone$",
            r"^mobile$",
            r"^telephone$",
            r"^cell$",
            r"^contact[\s_-]?number$",
            r"^phone\d*$",
            r"^tel$",
            r"^applicant[-_]phone$",
            r".*phone.*input.*field.*",
        ],
    ),
    (
        "dob",
        &[
            r"^dob$",
            r"^date[\s_-]?of[\s_-]?birth$",
            r"^birthdate$",
            r"^birthday$",
            r"^birth[-_]date$",
            r"^birth[-_]day$",
            r".*birth.*date.*",
        ],
    ),
    (
        "gender",
        &[r"^gender$", r"^sex$", r"^user[_-]?gender$", r".*gender.*select.*"],
    ),
    // address fields
    (
        "country",
        &[
            r"^country$",
            r"^countries$",
            r"^nation$",
            r"^billing[-_]country$",
            r"^shipping[-_]country$",
            r"^contact[Ii]nfo\.country$",
            r".*country.*select.*",
            r".*\.country$",
            r".*country$",
        ],
    ),
    (
        "state",
        &[
            r"^state$",
            r"^states$",
            r"^province$",
            r"^region$",
            r"^billing[-_]state$",
            r"^shipping[-_]state$",
            r"^contact[Ii]nfo\.region$",
            r".*state.*select.*",
            r".*\.region$",
            r".*state.*province.*",
        ],
    ),
    (
        "city",
        &[
            r"^city$",
            r"^town$",
            r"^municipality$",
            r"^billing[-_]city$",
            r"^shipping[-_]city$",
        ],
    ),
    (
        "address",
        &[
            r"^address$",
            r"^street$",
            r"^address[-_]?1$",
            r"^address[-_]line[-_]?1$",
            r"^street[-_]address$",
            r"^billing[-_]address$",
            r"^shipping[-_]address$",
            r".*street.*address.*",
        ],
    ),
    (
        "address2",
        &[
            r"^address[-_]?2$",
            r"^address[-_]line[-_]?2$",
            r"^apt$",
            r"^apartment$",
            r"^suite$",
            r"^unit$",
        ],
    ),
    (
        "zip",
        &[
            r"^zip$",
            r"^zipcode$",
            r"^zip[-_]code$",
            r"^postal$",
            r"^postalcode$",
            r"^postal[-_]code$",
            r"^postcode$",
            r"^contact[Ii]nfo\.postal[Cc]ode$",
            r".*postal.*code.*",
            r".*\.postal[Cc]ode$",
        ],
    ),
    // documents and files
    (
        "resume",
        &[
            r"^resume$",
            r"^cv$",
            r"^curriculum[\s_-]?vitae$",
            r"^upload[_-]?resume$",
            r"^resumeupload$",
            r"^resume[-_]upload$",
            r"^resume[-_]selection$",
            r"^resume[-_]file$",
            r"^cv[-_]upload$",
            r"^cv[-_]file$",
            r"^document[-_]resume$",
            r".*resume.*file.*",
            r".*resume.*upload.*",
            r".*cv.*upload.*",
        ],
    ),
    (
        "cover_letter",
        &[
            r"^cover[\s_-]?letter$",
            r"^motivation[\s_-]?letter$",
            r"^application[\s_-]?letter$",
            r"^coverletter$",
            r"^cover$",
        ],
    ),
    (
        "portfolio",
        &[
            r"^portfolio$",
            r"^site$",
            r"^portfolio[_-]?url$",
            r"^github$",
            r"^website$",
            r"^personal[-_]site$",
        ],
    ),
    // profile links
    (
        "linkedin",
        &[r"^linkedin$", r"^li[_-]?profile$", r"^linkedin[_-]?url$"],
    ),
    (
        "github",
        &[r"^github$", r"^git[_-]?profile$", r"^git[_-]?repo$"],
    ),
    (
        "twitter",
        &[r"^twitter$", r"^x$", r"^twitter[_-]?handle$"],
    ),
    (
        "website",
        &[r"^website$", r"^portfolio$", r"^personal[_-]?site$", r"^homepage$"],
    ),
    // account and authentication
    (
        "username",
        &[
            r"^username$",
            r"^user$",
            r"^login$",
            r"^userid$",
            r"^user[_-]?name$",
            r"^handle$",
            r"^display[-_]?name$",
        ],
    ),
    (
        "password",
        &[
            r"^password$",
            r"^pass$",
            r"^pwd$",
            r"^user[_-]?password$",
            r"^password[-_]bem$",
            r".*__input--password$",
            r"^input[-_]password[-_][a-z0-9]{5,8}$",
            r"^react[-_]password$",
            r".*Password_.*\d+$",
            r".*password.*field.*control.*",
        ],
    ),
    (
        "confirm_password",
        &[
            r"^confirm[_-]?password$",
            r"^repeat[_-]?password$",
            r"^retype[_-]?password$",
            r"^password[-_]?2$",
            r"^verify[-_]?password$",
            r".*confirm.*password.*",
        ],
    ),
    (
        "remember_me",
        &[
            r"^remember$",
            r"^remember[-_]me$",
            r"^stay[-_]logged[-_]in$",
            r"^keep[-_]logged[-_]in$",
        ],
    ),
    // search fields
    (
        "search_query",
        &[
            r"^query$",
            r"^search[-_]query$",
            r"^searchQuery$",
            r"^q$",
            r"^search$",
            r"^term$",
            r"^what$",
            r"^keyword$",
            r"^keywords$",
            r"^filter[-_]?input$",
            r".*search.*query.*",
            r".*search.*input.*",
        ],
    ),
    (
        "location",
        &[
            r"^location$",
            r"^locations$",
            r"^search[-_]location$",
            r"^loc$",
            r"^where$",
            r"^city$",
            r"^place$",
            r".*location.*input.*",
        ],
    ),
    // job search fields
    (
        "keywords",
        &[
            r"^keywords$",
            r"^keyword$",
            r"^search[-_]keywords$",
            r"^job[-_]keywords$",
            r"^kw$",
            r"^term$",
            r"^what$",
        ],
    ),
    (
        "job_title",
        &[r"^title$", r"^job[-_]title$", r"^position$", r"^role$", r"^job$"],
    ),
    (
        "job_type",
        &[
            r"^jobtype$",
            r"^jobtypes$",
            r"^job[-_]type$",
            r"^job[-_]types$",
            r"^type$",
            r"^employment[-_]type$",
            r"^employment[-_]types$",
        ],
    ),
    (
        "experience_level",
        &[
            r"^experience$",
            r"^experiences$",
            r"^exp[-_]level$",
            r"^experience[-_]level$",
            r"^seniority$",
            r"^level$",
        ],
    ),
    (
        "salary",
        &[
            r"^salary$",
            r"^min[-_]salary$",
            r"^salary[-_]range$",
            r"^compensation$",
            r"^pay$",
        ],
    ),
    (
        "distance",
        &[
            r"^distance$",
            r"^radius$",
            r"^within$",
            r"^miles$",
            r"^search[-_]radius$",
        ],
    ),
    // e-commerce fields
    (
        "quantity",
        &[
            r"^quantity$",
            r"^qty$",
            r"^product[_-]?quantity$",
            r"^item[_-]?quantity$",
        ],
    ),
    (
        "price_min",
        &[r"^price[_-]?min$", r"^min[_-]?price$", r"^minPrice$", r"^priceFrom$"],
    ),
    (
        "price_max",
        &[r"^price[_-]?max$", r"^max[_-]?price$", r"^maxPrice$", r"^priceTo$"],
    ),
    (
        "condition",
        &[r"^condition$", r"^product[_-]?condition$", r"^item[_-]?condition$"],
    ),
    (
        "size",
        &[r"^size$", r"^product[_-]?size$", r"^item[_-]?size$"],
    ),
    (
        "color",
        &[r"^colou?r$", r"^product[_-]?colou?r$", r"^item[_-]?colou?r$"],
    ),
    (
        "category",
        &[r"^category$", r"^cat$", r"^product[_-]?category$"],
    ),
    // social and content fields
    (
        "comment",
        &[
            r"^comment$",
            r"^comments$",
            r"^message$",
            r"^reply$",
            r"^feedback$",
            r"^text$",
            r"^body$",
            r".*comment.*text.*",
        ],
    ),
    (
        "newsletter",
        &[
            r"^newsletter$",
            r"^subscribe$",
            r"^subscription$",
            r"^email[-_]signup$",
        ],
    ),
    (
        "tags",
        &[r"^tags?$", r"^categories$", r"^category$", r"^topics?$"],
    ),
    (
        "sort",
        &[
            r"^sort$",
            r"^sortby$",
            r"^sort[-_]by$",
            r"^order$",
            r"^orderby$",
            r"^order[-_]by$",
        ],
    ),
    (
        "filter",
        &[r"^filter$", r"^filterinput$", r"^filter[-_]input$"],
    ),
    // buttons
    (
        "submit_button",
        &[
            r"^submit$",
            r"^save$",
            r"^apply$",
            r"^send$",
            r"^submit[-_]button$",
            r"^btn[-_]submit$",
            r".*submit.*button.*",
        ],
    ),
    ("next_button", &[r"^next$", r"^continue$"]),
    ("cancel_button", &[r"^cancel$"]),
    (
        "login_button",
        &[r"^login$", r"^sign[_-]?in$", r"^signin$", r".*login.*button.*"],
    ),
    (
        "signup_button",
        &[r"^signup$", r"^sign[_-]?up$", r"^register$"],
    ),
    (
        "search_button",
        &[r"^search$", r"^find$", r"^search[-_]button$", r".*search.*button.*"],
    ),
    (
        "add_to_cart",
        &[r"^add.*cart$", r"^addToCart$", r"^add.*bag$", r"^add.*basket$"],
    ),
    (
        "buy_now",
        &[r"^buy.*now$", r"^buyNow$", r"^purchase.*now$"],
    ),
    // social login
    (
        "google_login",
        &[
            r"^google[-_]?login$",
            r"^google[-_]?signin$",
            r"^login[-_]?google$",
            r".*google.*login.*",
        ],
    ),
    (
        "facebook_login",
        &[
            r"^facebook[-_]?login$",
            r"^fb[-_]?login$",
            r"^facebook[-_]?signin$",
            r".*facebook.*login.*",
        ],
    ),
    (
        "twitter_login",
        &[
            r"^twitter[-_]?login$",
            r"^x[-_]?login$",
            r"^twitter[-_]?signin$",
            r".*twitter.*login.*",
        ],
    ),
    (
        "github_login",
        &[r"^github[-_]?login$", r"^github[-_]?signin$", r".*github.*login.*"],
    ),
    (
        "linkedin_login",
        &[
            r"^linkedin[-_]?login$",
            r"^linkedin[-_]?signin$",
            r".*linkedin.*login.*",
        ],
    ),
    (
        "apple_login",
        &[
            r"^apple[-_]?login$",
            r"^apple[-_]?signin$",
            r"^apple[-_]?id$",
            r".*apple.*login.*",
        ],
    ),
    // search inputs
    (
        "search_input",
        &[
            r"^search$",
            r"^search[\s_-]?box$",
            r"^search[\s_-]?input$",
            r"^find$",
            r"^lookup$",
            r"^query$",
        ],
    ),
    // work authorization
    (
        "work_authorization",
        &[
            r"^work[-_]auth.*",
            r"^authorization.*",
            r"^visa.*",
            r"^eligib.*",
            r"^legal.*work.*",
            r"^sponsor.*",
            r".*work.*authorization.*",
            r".*authorization.*type.*",
        ],
    ),
    // preferences and opt-ins
    (
        "sms_optin",
        &[
            r"^sms[-_]opt[-_]?in$",
            r"^sms[-_]consent$",
            r"^text[-_]opt[-_]?in$",
            r"^text[-_]messages.*",
            r".*sms.*opt.*",
            r".*text.*messages.*accepted.*",
        ],
    ),
    (
        "email_optin",
        &[
            r"^email[-_]opt[-_]?in$",
            r"^email[-_]consent$",
            r"^email[-_]updates$",
            r"^newsletter$",
            r".*email.*opt.*",
            r".*email.*updates.*",
            r".*campaign.*email.*",
            r".*email.*enabled.*",
        ],
    ),
    (
        "job_alerts",
        &[
            r"^job[-_]alerts?$",
            r"^alerts?$",
            r"^notifications?$",
            r"^job[-_]notifications?$",
            r".*job.*alerts.*",
            r".*job.*matches.*",
        ],
    ),
    (
        "remote_work",
        &[
            r"^remote[-_]work$",
            r"^remote[-_]?preference$",
            r"^remote[-_]?willing$",
            r"^relocation[-_]preference$",
            r".*remote.*work.*",
            r".*relocation.*",
        ],
    ),
    (
        "future_consideration",
        &[
            r"^future[-_]consideration$",
            r"^keep[-_]on[-_]file$",
            r"^future[-_]opportunities$",
            r".*future.*consideration.*",
        ],
    ),
    // company information
    (
        "company_name",
        &[
            r"^company$",
            r"^company[-_]name$",
            r"^organization$",
            r"^employer$",
            r"^business[-_]name$",
            r".*company.*name.*",
        ],
    ),
    // signature and legal
    (
        "signature",
        &[
            r"^signature$",
            r"^electronic[-_]signature$",
            r"^e[-_]signature$",
            r"^sign$",
            r"^applicant.*signature$",
            r".*signature.*",
        ],
    ),
    (
        "acknowledgement",
        &[
            r"^acknowledge.*",
            r"^agree.*",
            r"^accept.*",
            r"^terms.*",
            r"^consent$",
            r".*acknowledgement.*",
        ],
    ),
    // demographics
    (
        "pronoun",
        &[r"^pronoun.*", r"^pronouns$", r".*\.pronoun.*"],
    ),
    (
        "veteran_status",
        &[r"^veteran.*", r".*veteran.*status.*"],
    ),
    (
        "disability_status",
        &[r"^disability.*", r".*disability.*status.*"],
    ),
    (
        "race_ethnicity",
        &[
            r"^race$",
            r"^ethnicity$",
            r"^race[-_]ethnicity$",
            r".*race.*ethnicity.*",
        ],
    ),
    // job application specific
    (
        "referral_source",
        &[
            r"^referr.*",
            r"^how.*hear.*",
            r"^source$",
            r".*referred.*by.*",
            r".*how.*hear.*about.*",
        ],
    ),
    (
        "compensation_expectations",
        &[
            r"^comp.*expectations?$",
            r"^salary.*expect.*",
            r"^desired[-_]salary$",
            r".*compensation.*expectations.*",
            r".*comp.*expectations.*",
        ],
    ),
    (
        "reason_leaving",
        &[
            r"^reason.*leaving$",
            r"^leaving[-_]reason$",
            r".*reason.*leaving.*",
        ],
    ),
    (
        "employment_type_preference",
        &[
            r"^employment[-_]type$",
            r"^job[-_]type[-_]preference$",
            r"^type[-_]preference$",
            r".*employment.*type.*",
        ],
    ),
    // education fields
    (
        "education_level",
        &[
            r"^education$",
            r"^education[-_]level$",
            r"^degree$",
            r"^education[-_]type$",
            r".*education.*level.*",
            r".*education.*type.*",
        ],
    ),
    (
        "school_name",
        &[
            r"^school$",
            r"^school[-_]name$",
            r"^institution$",
            r"^university$",
            r"^college$",
            r".*school.*institution.*name.*",
        ],
    ),
    (
        "area_of_study",
        &[
            r"^major$",
            r"^area[-_]of[-_]study$",
            r"^field[-_]of[-_]study$",
            r"^study[-_]area$",
            r".*area.*study.*",
        ],
    ),
    (
        "graduation_status",
        &[
            r"^graduated$",
            r"^graduation[-_]status$",
            r"^graduation[-_]date$",
            r".*graduated.*",
        ],
    ),
];

/// A single compiled pattern alongside its original text form.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    /// The pattern as written in the dictionary.
    pub raw: String,
    /// Case-insensitive compiled form, matched unanchored against raw text.
    pub regex: Regex,
}

/// One canonical field: its name, compiled patterns, and derived synonyms.
#[derive(Debug, Clone)]
pub struct FieldEntry {
    pub name: String,
    pub patterns: Vec<FieldPattern>,
    /// Normalized fuzzy-match vocabulary, sorted and deduplicated.
    pub synonyms: Vec<String>,
}

/// Compiled field dictionary, preserving declaration order.
#[derive(Debug, Clone)]
pub struct FieldDictionary {
    fields: Vec<FieldEntry>,
}

impl FieldDictionary {
    /// Compile the built-in pattern table.
    pub fn builtin() -> Result<Self, FieldprobeError> {
        Self::from_table(FIELD_PATTERNS)
    }

    /// Compile an arbitrary pattern table.
    ///
    /// Fails with [`FieldprobeError::MalformedPattern`] on the first pattern
    /// that does not compile; a dictionary is never partially usable.
    pub fn from_table(table: &[(&str, &[&str])]) -> Result<Self, FieldprobeError> {
        let mut fields = Vec::with_capacity(table.len());
        for (name, patterns) in table {
            let mut compiled = Vec::with_capacity(patterns.len());
            for pattern in *patterns {
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| FieldprobeError::MalformedPattern {
                        field: (*name).to_string(),
                        pattern: (*pattern).to_string(),
                        source,
                    })?;
                compiled.push(FieldPattern {
                    raw: (*pattern).to_string(),
                    regex,
                });
            }
            fields.push(FieldEntry {
                name: (*name).to_string(),
                patterns: compiled,
                synonyms: derive_synonyms(name, patterns),
            });
        }
        Ok(Self { fields })
    }

    /// Fields in declaration order.
    pub fn entries(&self) -> &[FieldEntry] {
        &self.fields
    }

    /// Look up a field by canonical name.
    pub fn get(&self, name: &str) -> Option<&FieldEntry> {
        self.fields.iter().find(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

lazy_static::lazy_static! {
    /// Shared compiled dictionary. The built-in table is validated by tests;
    /// a pattern that fails to compile is a programming error, so this
    /// initializer is allowed to panic.
    pub static ref GLOBAL_DICTIONARY: Arc<FieldDictionary> =
        Arc::new(FieldDictionary::builtin().expect("built-in field patterns must compile"));
}

#[cfg(test)]
#[path = "dictionary_test.rs"]
mod dictionary_test;
