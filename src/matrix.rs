//! CI matrix construction
//!
//! Expands each selected version into one row per supported PHP version.
//! Auxiliary services are pinned to the newest compatible version listed for
//! the release, or left empty when the catalog lists none.

use serde::Serialize;

use crate::catalog::types::VersionMetadata;

/// Requirement key holding the PHP versions a release supports
const PHP: &str = "php";

/// Auxiliary service tracked in every matrix row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Composer,
    Mysql,
    Mariadb,
    Elasticsearch,
    Opensearch,
    Redis,
    Valkey,
    Rabbitmq,
    Varnish,
    Nginx,
}

impl Service {
    /// All tracked services in output order
    pub const ALL: [Service; 10] = [
        Service::Composer,
        Service::Mysql,
        Service::Mariadb,
        Service::Elasticsearch,
        Service::Opensearch,
        Service::Redis,
        Service::Valkey,
        Service::Rabbitmq,
        Service::Varnish,
        Service::Nginx,
    ];

    /// Returns the requirement key (and matrix field name) of the service
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Composer => "composer",
            Service::Mysql => "mysql",
            Service::Mariadb => "mariadb",
            Service::Elasticsearch => "elasticsearch",
            Service::Opensearch => "opensearch",
            Service::Redis => "redis",
            Service::Valkey => "valkey",
            Service::Rabbitmq => "rabbitmq",
            Service::Varnish => "varnish",
            Service::Nginx => "nginx",
        }
    }
}

/// One CI job configuration.
///
/// Field names and order are the output contract; every field is always
/// serialized, empty when the catalog lists no version.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MatrixRow {
    pub magento: String,
    pub php: String,
    pub composer: String,
    pub mysql: String,
    pub mariadb: String,
    pub elasticsearch: String,
    pub opensearch: String,
    pub redis: String,
    pub valkey: String,
    pub rabbitmq: String,
    pub varnish: String,
    pub nginx: String,
}

impl MatrixRow {
    /// Returns the pinned version of an auxiliary service
    pub fn service(&self, service: Service) -> &str {
        match service {
            Service::Composer => &self.composer,
            Service::Mysql => &self.mysql,
            Service::Mariadb => &self.mariadb,
            Service::Elasticsearch => &self.elasticsearch,
            Service::Opensearch => &self.opensearch,
            Service::Redis => &self.redis,
            Service::Valkey => &self.valkey,
            Service::Rabbitmq => &self.rabbitmq,
            Service::Varnish => &self.varnish,
            Service::Nginx => &self.nginx,
        }
    }
}

/// Matrix in the shape GitHub Actions expects for `strategy.matrix`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Matrix {
    pub include: Vec<MatrixRow>,
}

/// Last (newest) listed version of a service, or "" if none is listed
fn latest_of(info: &VersionMetadata, service: Service) -> String {
    info.requirement(service.as_str())
        .last()
        .cloned()
        .unwrap_or_default()
}

/// Builds the matrix: one row per selected version and PHP version.
///
/// Rows follow the input order of versions, then the catalog order of PHP
/// versions. A version without PHP versions contributes no rows.
pub fn build_matrix<'a, I>(versions: I) -> Matrix
where
    I: IntoIterator<Item = &'a VersionMetadata>,
{
    let mut include = Vec::new();

    for info in versions {
        let template = MatrixRow {
            magento: info.version.clone(),
            php: String::new(),
            composer: latest_of(info, Service::Composer),
            mysql: latest_of(info, Service::Mysql),
            mariadb: latest_of(info, Service::Mariadb),
            elasticsearch: latest_of(info, Service::Elasticsearch),
            opensearch: latest_of(info, Service::Opensearch),
            redis: latest_of(info, Service::Redis),
            valkey: latest_of(info, Service::Valkey),
            rabbitmq: latest_of(info, Service::Rabbitmq),
            varnish: latest_of(info, Service::Varnish),
            nginx: latest_of(info, Service::Nginx),
        };

        include.extend(info.requirement(PHP).iter().map(|php| MatrixRow {
            php: php.clone(),
            ..template.clone()
        }));
    }

    Matrix { include }
}
