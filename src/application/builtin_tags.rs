//! Built-in tag tables for the two sites
//!
//! Rows are `(id, parent, title)` in registry order.

use crate::domain::{BaseTag, CATEGORY, SUBCATEGORY, TOPIC};

type Row = (&'static str, Option<&'static str>, &'static str);

pub const PHYSICS_HIERARCHY: &[&str] = &[CATEGORY, SUBCATEGORY, TOPIC];
pub const COMPUTER_SCIENCE_HIERARCHY: &[&str] = &[CATEGORY, SUBCATEGORY, TOPIC];

const PHYSICS_TAGS: &[Row] = &[
    // Categories
    ("physics", None, "Physics"),
    ("maths", None, "Maths"),
    ("chemistry", None, "Chemistry"),
    ("biology", None, "Biology"),
    // Physics subcategories
    ("skills", Some("physics"), "Skills"),
    ("mechanics", Some("physics"), "Mechanics"),
    ("fields", Some("physics"), "Fields"),
    ("waves_particles", Some("physics"), "Waves & Particles"),
    ("thermal", Some("physics"), "Thermal"),
    ("electricity", Some("physics"), "Electricity"),
    // Physics topics
    ("sig_figs", Some("skills"), "Significant Figures"),
    ("units", Some("skills"), "Units"),
    ("statics", Some("mechanics"), "Statics"),
    ("kinematics", Some("mechanics"), "Kinematics"),
    ("dynamics", Some("mechanics"), "Dynamics"),
    ("circular_motion", Some("mechanics"), "Circular Motion"),
    ("oscillations", Some("mechanics"), "Oscillations"),
    ("angular_motion", Some("mechanics"), "Angular Motion"),
    ("electric", Some("fields"), "Electric Fields"),
    ("magnetic", Some("fields"), "Magnetic Fields"),
    ("gravitational", Some("fields"), "Gravitational Fields"),
    ("combined", Some("fields"), "Combined Fields"),
    ("optics", Some("waves_particles"), "Optics"),
    ("waves", Some("waves_particles"), "Wave Motion"),
    ("superposition", Some("waves_particles"), "Superposition"),
    ("quantum", Some("waves_particles"), "Quantum"),
    ("nuclear", Some("waves_particles"), "Nuclear"),
    ("heat_capacity", Some("thermal"), "Heat Capacity"),
    ("gases", Some("thermal"), "Gases"),
    ("thermal_radiation", Some("thermal"), "Thermal Radiation"),
    ("charge_current", Some("electricity"), "Charge & Current"),
    ("resistors", Some("electricity"), "Resistors"),
    ("capacitors", Some("electricity"), "Capacitors"),
    ("internal_resistance", Some("electricity"), "Internal Resistance"),
    // Maths subcategories
    ("number", Some("maths"), "Number"),
    ("algebra", Some("maths"), "Algebra"),
    ("geometry", Some("maths"), "Geometry"),
    ("functions", Some("maths"), "Functions"),
    ("calculus", Some("maths"), "Calculus"),
    ("statistics", Some("maths"), "Statistics"),
    // Maths topics
    ("arithmetic", Some("number"), "Arithmetic"),
    ("rational", Some("number"), "Rational Numbers"),
    ("manipulation", Some("algebra"), "Manipulation"),
    ("quadratics", Some("algebra"), "Quadratics"),
    ("simultaneous", Some("algebra"), "Simultaneous Equations"),
    ("series", Some("algebra"), "Series"),
    ("vectors", Some("geometry"), "Vectors"),
    ("trigonometry", Some("geometry"), "Trigonometry"),
    ("shapes", Some("geometry"), "Shapes"),
    ("general_functions", Some("functions"), "General Functions"),
    ("graph_sketching", Some("functions"), "Graph Sketching"),
    ("differentiation", Some("calculus"), "Differentiation"),
    ("integration", Some("calculus"), "Integration"),
    ("differential_eq", Some("calculus"), "Differential Equations"),
    ("probability", Some("statistics"), "Probability"),
    ("data_analysis", Some("statistics"), "Data Analysis"),
    // Chemistry subcategories
    ("physical", Some("chemistry"), "Physical"),
    ("inorganic", Some("chemistry"), "Inorganic"),
    ("organic", Some("chemistry"), "Organic"),
    // Chemistry topics
    ("kinetics", Some("physical"), "Kinetics"),
    ("energetics", Some("physical"), "Energetics"),
    ("equilibrium", Some("physical"), "Equilibrium"),
    ("atomic_structure", Some("inorganic"), "Atomic Structure"),
    ("bonding", Some("inorganic"), "Bonding"),
    ("redox", Some("inorganic"), "Redox"),
    ("functional_groups", Some("organic"), "Functional Groups"),
    ("isomerism", Some("organic"), "Isomerism"),
    // Biology subcategories and topics
    ("cell_biology", Some("biology"), "Cell Biology"),
    ("genetics", Some("biology"), "Genetics"),
    ("cell_structure", Some("cell_biology"), "Cell Structure"),
    ("membranes", Some("cell_biology"), "Membranes"),
    ("inheritance", Some("genetics"), "Inheritance"),
    ("dna", Some("genetics"), "DNA"),
];

const COMPUTER_SCIENCE_TAGS: &[Row] = &[
    // Categories
    ("theory", None, "Theory"),
    ("programming", None, "Programming"),
    // Theory subcategories
    ("data_structures_and_algorithms", Some("theory"), "Data structures and algorithms"),
    ("computer_networks", Some("theory"), "Computer networks"),
    ("computer_systems", Some("theory"), "Computer systems"),
    ("data_and_information", Some("theory"), "Data and information"),
    ("cyber_security", Some("theory"), "Cyber security"),
    ("theory_of_computation", Some("theory"), "Theory of computation"),
    // Programming subcategories
    ("programming_fundamentals", Some("programming"), "Programming fundamentals"),
    ("programming_paradigms", Some("programming"), "Programming paradigms"),
    ("software_engineering", Some("programming"), "Software engineering"),
    // Theory topics
    ("searching_sorting_pathfinding", Some("data_structures_and_algorithms"), "Searching, sorting & pathfinding"),
    ("complexity", Some("data_structures_and_algorithms"), "Complexity"),
    ("data_structures", Some("data_structures_and_algorithms"), "Data structures"),
    ("networking", Some("computer_networks"), "Networking"),
    ("network_hardware", Some("computer_networks"), "Network hardware"),
    ("communication", Some("computer_networks"), "Communication"),
    ("boolean_logic", Some("computer_systems"), "Boolean logic"),
    ("architecture", Some("computer_systems"), "Architecture"),
    ("hardware", Some("computer_systems"), "Hardware"),
    ("operating_systems", Some("computer_systems"), "Operating systems"),
    ("number_representation", Some("data_and_information"), "Number representation"),
    ("text_representation", Some("data_and_information"), "Text representation"),
    ("image_representation", Some("data_and_information"), "Image representation"),
    ("databases", Some("data_and_information"), "Databases"),
    ("compression", Some("data_and_information"), "Compression"),
    ("encryption", Some("cyber_security"), "Encryption"),
    ("social_engineering", Some("cyber_security"), "Social engineering"),
    ("malicious_code", Some("cyber_security"), "Malicious code"),
    ("machines_with_memory", Some("theory_of_computation"), "Machines with memory"),
    ("models_of_computation", Some("theory_of_computation"), "Models of computation"),
    // Programming topics
    ("programming_concepts", Some("programming_fundamentals"), "Programming concepts"),
    ("subroutines", Some("programming_fundamentals"), "Subroutines"),
    ("recursion", Some("programming_fundamentals"), "Recursion"),
    ("string_handling", Some("programming_fundamentals"), "String handling"),
    ("object_oriented_programming", Some("programming_paradigms"), "Object-oriented programming"),
    ("functional_programming", Some("programming_paradigms"), "Functional programming"),
    ("event_driven_programming", Some("programming_paradigms"), "Event-driven programming"),
    ("software_project", Some("software_engineering"), "Software project"),
    ("program_design", Some("software_engineering"), "Program design"),
    ("testing", Some("software_engineering"), "Testing"),
];

fn to_base_tags(rows: &[Row]) -> Vec<BaseTag> {
    rows.iter()
        .map(|&(id, parent, title)| match parent {
            Some(parent) => BaseTag::child(id, parent, title),
            None => BaseTag::root(id, title),
        })
        .collect()
}

pub fn physics_tags() -> Vec<BaseTag> {
    to_base_tags(PHYSICS_TAGS)
}

pub fn computer_science_tags() -> Vec<BaseTag> {
    to_base_tags(COMPUTER_SCIENCE_TAGS)
}
