//! Descriptive text for the GBIF provider and its endpoints

pub const NAME: &str = "GBIF API v1";

pub const CITATION: &str = "GBIF: The Global Biodiversity Information Facility (year) What is GBIF?. \
Available from https://www.gbif.org/what-is-gbif [13 January 2020]";

pub const LICENSE: &str = "Copyright 2014 Global Biodiversity Information Facility (GBIF). \
Licensed under the Apache License, Version 2.0 (the \"License\"); you may not use this file \
except in compliance with the License. You may obtain a copy of the License at \
http://www.apache.org/licenses/LICENSE-2.0";

pub const DESCRIPTION: &str = "The GBIF API is a RESTful JSON based API. It is split into \
Registry (datasets, organizations, networks and their technical endpoints), Species (taxa, \
name lookup and name interpretation), Occurrence (indexed occurrence records, search and \
downloads) and Maps (map tiles of GBIF mobilized content). \
See https://www.gbif.org/developer/summary";

pub const REGISTRY_DESCRIPTION: &str = "Works against the GBIF Registry, which makes all \
registered Datasets, Installations, Organizations, Nodes, and Networks discoverable. \
See https://www.gbif.org/developer/registry";

pub const SPECIES_DESCRIPTION: &str = "Works against the GBIF Checklist Bank, which \
taxonomically indexes all registered checklist datasets in the GBIF network. \
See https://www.gbif.org/developer/species";

pub const OCCURRENCE_DESCRIPTION: &str = "Works against the GBIF Occurrence Store, which \
handles occurrence records and makes them available through the web service and download \
files. See https://www.gbif.org/developer/occurrence";

pub const MAPS_DESCRIPTION: &str = "Not implemented. Map layers for countries, datasets, \
taxa, publishers and networks, as points or binned tiles in four projections. \
See https://www.gbif.org/developer/maps";
