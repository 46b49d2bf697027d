//! The compiled-in funding table.

use crate::topology::{Category, TopologyError, join_tables};

/// Funding themes and the organizations backing each, in display order.
pub const CATEGORIES: &[(&str, &[&str])] = &[
	(
		"Climate & Environment",
		&[
			"Bloomberg Philanthropies",
			"ClimateWorks Foundation",
			"Bezos Earth Fund",
			"Packard Foundation",
		],
	),
	(
		"Global Health",
		&[
			"Bill & Melinda Gates Foundation",
			"Wellcome Trust",
			"Rockefeller Foundation",
		],
	),
	(
		"Education & Youth",
		&[
			"Walton Family Foundation",
			"Lumina Foundation",
			"Kresge Foundation",
		],
	),
	(
		"Systemic Change & Social Justice",
		&["Ford Foundation", "Open Society Foundations"],
	),
	(
		"Arts & Culture",
		&["Andrew W. Mellon Foundation", "Knight Foundation"],
	),
	(
		"Science & Technology",
		&[
			"Simons Foundation",
			"Alfred P. Sloan Foundation",
			"Schmidt Futures",
		],
	),
	(
		"Economic Opportunity",
		&[
			"W.K. Kellogg Foundation",
			"MacArthur Foundation",
			"Skoll Foundation",
		],
	),
	(
		"Democracy & Governance",
		&["Hewlett Foundation", "Omidyar Network", "Luminate"],
	),
];

/// Weight of the links from each category to its members.
pub const EDGE_WEIGHTS: &[(&str, f64)] = &[
	("Climate & Environment", 2.0),
	("Global Health", 2.5),
	("Education & Youth", 1.5),
	("Systemic Change & Social Justice", 3.0),
	("Arts & Culture", 1.0),
	("Science & Technology", 2.0),
	("Economic Opportunity", 1.5),
	("Democracy & Governance", 2.0),
];

/// The funding table as ready-to-build categories.
pub fn funding_categories() -> Result<Vec<Category>, TopologyError> {
	join_tables(CATEGORIES, EDGE_WEIGHTS)
}
