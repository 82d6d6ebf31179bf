use crate::models::{MissionPillar, TeamMember};

pub const MISSION: &[MissionPillar] = &[
    MissionPillar {
        icon: "\u{1f4da}",
        title: "Educate",
        description: "Provide high-quality tutorials and guides to help developers learn and grow.",
    },
    MissionPillar {
        icon: "\u{1f680}",
        title: "Inspire",
        description: "Share innovative ideas and cutting-edge technologies to inspire creativity.",
    },
    MissionPillar {
        icon: "\u{1f91d}",
        title: "Connect",
        description: "Build a community of developers who support and learn from each other.",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Sarah Chen",
        role: "Lead Developer",
        bio: "Full-stack developer with 8+ years of experience in React and Node.js. Passionate about building web applications that scale with their teams.",
        skills: &["React", "TypeScript", "Node.js", "Architecture"],
        github: "https://github.com",
        twitter: "https://x.com",
        linkedin: "https://linkedin.com",
    },
    TeamMember {
        name: "Michael Rodriguez",
        role: "Backend & Platform",
        bio: "Backend engineer and veteran of many monolith migrations. Writes about services, queues and the people who run them.",
        skills: &["Node.js", "Microservices", "Docker", "Kubernetes"],
        github: "https://github.com",
        twitter: "https://x.com",
        linkedin: "https://linkedin.com",
    },
    TeamMember {
        name: "Emma Wilson",
        role: "Content Lead",
        bio: "Senior engineer and technical writer focused on developer experience, career growth and the stories behind the code.",
        skills: &["Technical Writing", "Mentoring", "JavaScript", "CSS"],
        github: "https://github.com",
        twitter: "https://x.com",
        linkedin: "https://linkedin.com",
    },
];
