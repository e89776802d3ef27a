//! Demo content for the RoboSapienZ site. The binary seeds its stores from
//! here; tests reach for it when they want a populated store.

use crate::{comments::COMMENT_AVATAR_PLACEHOLDER, posts::AUTHOR_AVATAR_PLACEHOLDER};
use leitstand_common::{
    model::{
        Id,
        comment::Comment,
        post::{Author, Category, Post, PostMarker, Tags},
        summary::Summary,
    },
    slug::Slug,
};
use time::{Duration, OffsetDateTime, macros::datetime};

pub const POST_IMAGE_PLACEHOLDER: &str = "https://placehold.co/600x400.png";

/// The demo posts, newest first. Every post ships with a summary, so a
/// freshly seeded store serves reads without touching the summarizer.
#[must_use]
pub fn posts() -> Vec<Post> {
    vec![
        post(
            "Getting Started with PLC Programming: A Beginner's Guide",
            "Controls",
            &["PLC", "Ladder Logic", "IEC 61131-3", "Controls"],
            "Controls Veteran",
            datetime!(2025-07-20 10:00 UTC),
            "A beginner-friendly introduction to PLC programming, from scan cycles to a \
             first working rung on a soft PLC runtime.",
            "Programmable logic controllers still run most of the world's production \
             lines. This guide walks you through your first controls project without \
             assuming any prior automation experience.\n\n\
             ## Prerequisites\n\n\
             You need a soft PLC runtime on your laptop and an IEC 61131-3 capable \
             editor. Every vendor IDE ships a simulator, so no hardware is required.\n\n\
             ## Your First Program\n\n\
             Start with a single rung that latches a motor contactor. In Structured \
             Text the same logic reads:\n\n\
             ```iecst\nVAR\n    start_button : BOOL;\n    stop_button : BOOL;\n    \
             motor_on : BOOL;\nEND_VAR\n\nmotor_on := (start_button OR motor_on) AND NOT \
             stop_button;\n```\n\n\
             Download it to the simulator, toggle the inputs, and watch the scan cycle \
             do its work. From here, everything else is layering.",
        ),
        post(
            "Mastering ROS 2 Navigation for Mobile Robots",
            "Robotics",
            &["ROS 2", "Nav2", "SLAM", "Robotics"],
            "Field Roboticist",
            datetime!(2025-07-18 14:30 UTC),
            "An exploration of the Nav2 stack for autonomous mobile robots, covering \
             costmaps, behavior trees, and tuning advice for real warehouse floors.",
            "The Nav2 stack turns a map and a laser scan into autonomous motion, but the \
             defaults are tuned for demos, not for a warehouse with forklifts. This post \
             collects what actually matters in production.\n\n\
             ## Bringing the Stack Up\n\n\
             ```bash\nros2 launch nav2_bringup bringup_launch.py map:=warehouse.yaml\n```\n\n\
             ## What to Tune First\n\n\
             Inflation radius, costmap update rates, and the recovery behaviors in the \
             behavior tree. Get those three right and most \"the robot froze\" tickets \
             disappear before you ever touch the planners.",
        ),
        post(
            "Exploring the Power of Digital Twins on the Plant Floor",
            "Industrial IoT",
            &["Digital Twin", "Simulation", "OPC UA", "Industry 4.0"],
            "Twin Builder",
            datetime!(2025-07-15 09:00 UTC),
            "An overview of digital twins for production lines, detailing how live \
             process data keeps a simulated cell in step with its physical counterpart.",
            "A digital twin is only useful while it stays synchronized with the real \
             cell. The moment the model drifts, every prediction it makes becomes a \
             liability.\n\n\
             ## Keeping the Twin Honest\n\n\
             Feed the simulation the same OPC UA tags the SCADA layer consumes, and \
             replay historian data through it nightly to measure drift. Commissioning \
             changes go to the twin first, then to the line.\n\n\
             Teams that adopt this discipline catch sequencing bugs in simulation that \
             would otherwise cost a weekend of downtime.",
        ),
        post(
            "Advanced Structured Text Patterns for Scalable Control Logic",
            "Controls",
            &["Structured Text", "IEC 61131-3", "Design Patterns"],
            "ST Pro",
            datetime!(2025-07-12 11:00 UTC),
            "A discussion of advanced Structured Text patterns, including explicit state \
             machines and function block composition, for control projects that keep \
             growing.",
            "Explore Structured Text patterns like enumerated state machines, function \
             block composition, and interface-driven device abstraction to keep a \
             growing control project maintainable. Flat rung logic stops scaling long \
             before the machine does, and these patterns are the difference between a \
             program you extend and one you rewrite.",
        ),
        post(
            "A Deep Dive into Robot Arm Kinematics",
            "Robotics",
            &["Kinematics", "Robot Arms", "Mathematics", "Motion"],
            "Kinematics Nerd",
            datetime!(2025-07-10 16:00 UTC),
            "A comprehensive look at forward and inverse kinematics for six-axis arms, \
             covering coordinate frames, Jacobians, and the singularities that bite in \
             practice.",
            "Forward kinematics is bookkeeping; inverse kinematics is where the trouble \
             lives. This post covers coordinate frame conventions, the Jacobian, and why \
             a six-axis arm near a wrist singularity will happily demand infinite joint \
             velocity from a perfectly reasonable tool path. Essential background before \
             you tune your first real motion program.",
        ),
        post(
            "Predictive Maintenance with Machine Learning in 2025",
            "AI",
            &["Predictive Maintenance", "Machine Learning", "Vibration Analysis"],
            "Data Plant",
            datetime!(2025-07-08 09:30 UTC),
            "An overview of machine-learning approaches to predictive maintenance in \
             2025, from vibration features to deploying models next to the historian.",
            "A comprehensive overview of predictive maintenance approaches in 2025, from \
             classical vibration features feeding gradient-boosted trees to anomaly \
             detection on raw accelerometer streams. Understand when a simple threshold \
             beats a model, and why deployment next to the historian matters more than \
             the last percent of accuracy.",
        ),
        post(
            "Introduction to Computer Vision for Pick-and-Place Cells",
            "AI",
            &["Computer Vision", "Pick and Place", "Deep Learning"],
            "Vision Explorer",
            datetime!(2025-07-05 14:00 UTC),
            "A beginner's guide to camera-guided picking, covering calibration, 2D \
             versus depth sensing, and getting a first detection model into a cell.",
            "Camera-guided picking looks like magic until you learn the recipe: a \
             calibrated camera, a detection model, and a hand-eye transform. This \
             introductory guide covers intrinsic and extrinsic calibration, choosing \
             between 2D and depth sensing, and the dataset size you realistically need \
             before the first part lands in the right bin. Perfect for a first vision \
             integration.",
        ),
        post(
            "Optimizing Cycle Times with Motion Profiles",
            "Controls",
            &["Motion Control", "Servo Drives", "Optimization"],
            "Motion Ninja",
            datetime!(2025-07-02 10:00 UTC),
            "Learn how trapezoidal and S-curve motion profiles trade smoothness against \
             speed, and how profile tuning shaves seconds off a machine cycle.",
            "Learn how trapezoidal and S-curve profiles trade smoothness against speed, \
             how jerk limits protect mechanics, and where overlapping moves recovers \
             cycle time nobody thought was there. Boost your machine throughput without \
             buying bigger drives.",
        ),
        post(
            "Building Safe Collaborative Robot Workcells: A Comprehensive Guide",
            "Robotics",
            &["Cobots", "ISO 10218", "Safety", "Risk Assessment"],
            "Safety Advocate",
            datetime!(2025-06-28 15:00 UTC),
            "A guide to risk assessment, speed and separation monitoring, and the \
             standards that govern collaborative robot workcells.",
            "Collaboration is a property of the workcell, not of the robot. This guide \
             covers risk assessment per ISO 10218 and ISO/TS 15066, power and force \
             limiting, speed and separation monitoring, and the practical tips that keep \
             auditors and operators equally happy. Important reading for every \
             integrator.",
        ),
        post(
            "Understanding OPC UA for Shop-Floor Connectivity",
            "Infrastructure",
            &["OPC UA", "Industrial Networks", "Edge Computing"],
            "Edge Architect",
            datetime!(2025-06-25 11:30 UTC),
            "An explanation of OPC UA's information model and pub/sub transport, and how \
             it links PLCs, SCADA, and edge services without custom drivers.",
            "OPC UA unifies what used to be a zoo of vendor drivers: one information \
             model, typed nodes, and a choice of client/server or pub/sub transport. \
             This post explains how address spaces are structured, what companion \
             specifications buy you, and how an edge gateway publishes line data to \
             services that never speak a fieldbus. A key building block for any \
             connected plant.",
        ),
    ]
}

/// Demo comments on the first two seed posts, timestamped relative to now so
/// they read as recent activity.
#[must_use]
pub fn comments(posts: &[Post]) -> Vec<Comment> {
    let now = OffsetDateTime::now_utc();
    let mut comments = Vec::new();

    if let Some(first) = posts.first() {
        comments.push(comment(
            first.id,
            "Jane Doe",
            "Great introduction! Looking forward to wiring up my first rung this weekend.",
            now - Duration::hours(2),
        ));
        comments.push(comment(
            first.id,
            "John Smith",
            "Very helpful, especially the part about scan cycles. Thanks!",
            now - Duration::hours(1),
        ));
    }

    if let Some(second) = posts.get(1) {
        comments.push(comment(
            second.id,
            "Alice Brown",
            "Nav2 is a game changer. This post clarifies the costmap layers really well.",
            now - Duration::days(3),
        ));
    }

    comments
}

fn post(
    title: &str,
    category: &str,
    tags: &[&str],
    author: &str,
    published_at: OffsetDateTime,
    summary: &str,
    content_markdown: &str,
) -> Post {
    Post {
        id: Id::random(),
        slug: Slug::generate(title),
        title: title.to_owned(),
        content_markdown: content_markdown.to_owned(),
        summary: Summary::Generated(summary.to_owned()),
        image_url: POST_IMAGE_PLACEHOLDER.to_owned(),
        category: Category::from(category),
        tags: Tags::new(tags.iter().map(|&tag| tag.to_owned()).collect()),
        published_at,
        author: Author {
            name: author.to_owned(),
            avatar_url: Some(AUTHOR_AVATAR_PLACEHOLDER.to_owned()),
        },
    }
}

fn comment(
    post_id: Id<PostMarker>,
    author_name: &str,
    text: &str,
    created_at: OffsetDateTime,
) -> Comment {
    Comment {
        id: Id::random(),
        post_id,
        author_name: author_name.to_owned(),
        text: text.to_owned(),
        created_at,
        avatar_url: Some(COMMENT_AVATAR_PLACEHOLDER.to_owned()),
    }
}
