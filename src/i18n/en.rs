// English
//
// Case-study entries (portfolio.items.*) only exist in the Vietnamese table.
pub(super) const ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.services", "Services"),
    ("nav.portfolio", "Portfolio"),
    ("nav.testimonials", "Testimonials"),
    ("nav.contact", "Contact"),

    // Hero
    ("hero.title", "Comprehensive Digital\nMarketing Solutions"),
    ("hero.subtitle", "We help businesses thrive in the digital age with multi-channel marketing solutions: SEO, SEM, Social Media, Content Marketing, and Analytics – optimizing ROI and driving sustainable revenue growth."),
    ("hero.cta", "Free Marketing Consultation"),
    ("hero.learn_more", "View Service Packages"),

    // Services
    ("services.title", "Digital Marketing Services"),
    ("services.subtitle", "Comprehensive digital marketing solutions to help businesses achieve sustainable growth in the digital era"),
    ("services.items.0.title", "SEO (Search Engine Optimization)"),
    ("services.items.0.description", "Optimize your website to achieve high rankings on Google, increase organic traffic and attract high-quality potential customers."),
    ("services.items.1.title", "SEM (Search Engine Marketing)"),
    ("services.items.1.description", "Effective Google Ads campaigns, optimize advertising costs and increase conversion rates with precise keyword strategies."),
    ("services.items.2.title", "Social Media Marketing"),
    ("services.items.2.description", "Build a strong brand presence on Facebook, Instagram, TikTok with creative content and effective engagement strategies."),
    ("services.items.3.title", "Content Marketing"),
    ("services.items.3.description", "Produce high-quality content that attracts and retains customers through storytelling and valuable information."),
    ("services.items.4.title", "Email Marketing"),
    ("services.items.4.description", "Automated email marketing campaigns, nurture leads and maintain long-term relationships with customers."),
    ("services.items.5.title", "Marketing Analytics"),
    ("services.items.5.description", "In-depth marketing data analysis, measure ROI and optimize strategies based on real insights."),
    ("services.items.6.title", "Video Marketing"),
    ("services.items.6.description", "Professional video marketing production, from TVC to viral videos, increase engagement and brand awareness."),
    ("services.items.7.title", "Mobile Marketing"),
    ("services.items.7.description", "Comprehensive mobile marketing strategy, optimize user experience on smartphones and tablets."),
    ("services.items.8.title", "Influencer Marketing"),
    ("services.items.8.description", "Connect with suitable KOLs and influencers, expand brand influence and reach new audiences."),
    ("services.seo.title", "Search Engine Optimization"),
    ("services.seo.description", "Improve your website ranking on Google and increase organic traffic."),
    ("services.social.title", "Social Media Marketing"),
    ("services.social.description", "Build your brand and engage with customers on social media platforms."),
    ("services.content.title", "Content Marketing"),
    ("services.content.description", "Create engaging content to attract and retain your customers."),
    ("services.email.title", "Email Marketing"),
    ("services.email.description", "Design and execute effective email campaigns to nurture leads."),
    ("services.analytics.title", "Analytics & Reporting"),
    ("services.analytics.description", "Track performance and optimize marketing strategies based on data."),
    ("services.mobile.title", "Mobile Marketing"),
    ("services.mobile.description", "Reach customers on mobile devices with optimized marketing strategies."),
    ("services.consultation_button", "Get Suitable Solution Consultation"),

    // Portfolio
    ("portfolio.title", "Portfolio & Case Studies"),
    ("portfolio.subtitle", "Explore successful projects we have delivered for our clients"),
    ("portfolio.view_details", "View Details"),
    ("portfolio.scroll_hint", "Scroll horizontally to see more"),
    ("portfolio.ecommerce", "E-commerce"),
    ("portfolio.education", "Education"),
    ("portfolio.healthcare", "Healthcare"),
    ("portfolio.financial", "Financial"),
    ("portfolio.restaurant", "Restaurant"),
    ("portfolio.tech", "Technology"),

    // Testimonials
    ("testimonials.title", "What Our Clients Say About Us"),
    ("testimonials.subtitle", "Over 500+ businesses have trusted and achieved success with us"),
    ("testimonials.items.0.name", "Nguyen Van An"),
    ("testimonials.items.0.position", "CEO"),
    ("testimonials.items.0.company", "TechViet Solutions"),
    ("testimonials.items.0.content", "Their marketing team helped us increase sales by 300% in just 6 months. SEO and Social Media strategies are truly effective!"),
    ("testimonials.items.0.results", "300% Sales Increase"),
    ("testimonials.items.1.name", "Tran Thi Binh"),
    ("testimonials.items.1.position", "Marketing Director"),
    ("testimonials.items.1.company", "Fashion House VN"),
    ("testimonials.items.1.content", "Professional, creative and effective. They turned our brand into a widely recognized name on social media."),
    ("testimonials.items.1.results", "250% Followers Growth"),
    ("testimonials.items.2.name", "Le Minh Cuong"),
    ("testimonials.items.2.position", "Founder"),
    ("testimonials.items.2.company", "EduTech Platform"),
    ("testimonials.items.2.content", "ROI from their advertising campaigns exceeded expectations. The team is always dedicated and provides creative solutions."),
    ("testimonials.items.2.results", "500% ROI Achieved"),
    ("testimonials.items.3.name", "Pham Thu Huong"),
    ("testimonials.items.3.position", "Operations Manager"),
    ("testimonials.items.3.company", "HealthCare Plus"),
    ("testimonials.items.3.content", "Excellent content marketing service! They helped us build credibility and attract thousands of new customers."),
    ("testimonials.items.3.results", "400% Traffic Growth"),
    ("testimonials.items.4.name", "Hoang Duc Thanh"),
    ("testimonials.items.4.position", "Business Owner"),
    ("testimonials.items.4.company", "Restaurant Chain"),
    ("testimonials.items.4.content", "Local SEO and Social Media Marketing helped our restaurant chain successfully expand to 8 new branches."),
    ("testimonials.items.4.results", "8 New Branches"),
    ("testimonials.items.5.name", "Vu Thi Mai"),
    ("testimonials.items.5.position", "Marketing Lead"),
    ("testimonials.items.5.company", "FinTech Startup"),
    ("testimonials.items.5.content", "Their Paid Ads strategy helped us reduce customer costs by 40% while increasing conversion rates by 320%."),
    ("testimonials.items.5.results", "40% Cost Reduction"),
    ("testimonials.stats.customers", "Satisfied Customers"),
    ("testimonials.stats.success_rate", "Success Rate"),
    ("testimonials.stats.support", "Customer Support"),
    ("testimonials.stats.rating", "Average Rating"),

    // CTA
    ("cta.title", "Ready to Grow Your Business?"),
    ("cta.subtitle", "Contact us now for free consultation and detailed project quotes"),
    ("cta.form.name", "Full Name"),
    ("cta.form.email", "Email"),
    ("cta.form.phone", "Phone Number"),
    ("cta.form.company", "Company"),
    ("cta.form.service", "Service of Interest"),
    ("cta.form.message", "Message"),
    ("cta.form.submit", "Send Consultation Request"),
    ("cta.form.submitting", "Sending..."),
    ("cta.form.success", "Thank you! We will contact you soon."),
    ("cta.benefits.0.title", "Free Consultation"),
    ("cta.benefits.0.description", "Detailed analysis of current situation and suitable solutions"),
    ("cta.benefits.1.title", "Transparent Pricing"),
    ("cta.benefits.1.description", "Clear costs, no hidden fees"),
    ("cta.benefits.2.title", "24/7 Support"),
    ("cta.benefits.2.description", "Expert team always ready to support"),
    ("cta.benefits.growth.title", "Rapid Growth"),
    ("cta.benefits.growth.description", "Increase 300% traffic and sales in first 6 months"),
    ("cta.benefits.guarantee.title", "Results Guarantee"),
    ("cta.benefits.guarantee.description", "Guaranteed minimum 200% ROI or 100% money back"),
    ("cta.benefits.support247.title", "24/7 Support"),
    ("cta.benefits.support247.description", "Expert team always ready to support you anytime"),
    ("cta.form.contact_now", "Contact Now"),
    ("cta.form.contact_description", "Fill in your information to receive free consultation from experts"),
    ("cta.form.get_consultation", "Get Free Consultation"),
    ("cta.form.submitting_text", "Sending..."),
    ("cta.form.success_title", "Thank you for contacting us!"),
    ("cta.form.success_message", "We will contact you within 24 hours."),
    ("cta.services.seo", "SEO Optimization"),
    ("cta.services.social_media", "Social Media Marketing"),
    ("cta.services.paid_ads", "Paid Advertising"),
    ("cta.services.content", "Content Marketing"),
    ("cta.services.email", "Email Marketing"),
    ("cta.services.consultation", "Overall Consultation"),
    ("cta.why_choose.title", "Why Choose Us?"),
    ("cta.why_choose.subtitle", "Over 500+ businesses have succeeded with us"),
    ("cta.form.name_label", "Full Name *"),
    ("cta.form.name_placeholder", "Enter your full name"),
    ("cta.form.email_label", "Email *"),
    ("cta.form.email_placeholder", "email@example.com"),
    ("cta.form.phone_label", "Phone Number"),
    ("cta.form.phone_placeholder", "0123 456 789"),
    ("cta.form.company_label", "Company"),
    ("cta.form.company_placeholder", "Company name"),
    ("cta.form.service_label", "Service of Interest"),
    ("cta.form.service_placeholder", "Select service"),
    ("cta.form.message_label", "Message"),
    ("cta.form.message_placeholder", "Describe your needs in detail..."),
    ("cta.contact.title", "Direct Contact"),
    ("cta.button", "Contact Now"),

    // Footer
    ("footer.description", "We help businesses thrive in the digital world with effective and creative marketing strategies."),
    ("footer.quick_links", "Quick Links"),
    ("footer.services_title", "Services"),
    ("footer.contact_info", "Contact Info"),
    ("footer.rights", "All rights reserved."),
    ("footer.quicklinks.home", "Home"),
    ("footer.quicklinks.services", "Services"),
    ("footer.quicklinks.portfolio", "Portfolio"),
    ("footer.quicklinks.about", "About Us"),
    ("footer.quicklinks.blog", "Blog"),
    ("footer.quicklinks.contact", "Contact"),
    ("footer.newsletter.title", "Subscribe to Newsletter"),
    ("footer.newsletter.placeholder", "Your email"),
    ("footer.copyright", "© 2024 Digital Agency. All rights reserved."),

    // Command line
    ("cli.about", "Bilingual agency site toolkit"),
    ("cli.page_written", "Page written"),
    ("cli.render_done", "Done, pages written"),
    ("cli.key_missing", "(no translation, key returned as-is)"),
    ("cli.keys_total", "Total keys"),
    ("cli.no_matches", "No keys match"),
    ("cli.audit_title", "Translation key audit"),
    ("cli.audit_only_in", "Only in"),
    ("cli.audit_symmetric", "Both locales define the same keys"),
    ("cli.audit_gap", "Missing keys"),
    ("cli.lang_ignored", "Unknown language, keeping"),
    ("cli.form_invalid", "The form is not valid"),
    ("cli.form_submitted_at", "Submitted at"),
    ("cli.preview_hint", "1-5 section · ←/→ carousel · Tab field · Enter submit · l / Ctrl-L language · q / Esc quit"),
    ("cli.preview_autoplay", "Autoplay"),
    ("cli.preview_unavailable", "Interactive preview is not available on this terminal"),
    ("cli.error_load_config", "Failed to load config"),
    ("cli.error_create_out_dir", "Failed to create output directory"),
    ("cli.error_write_page", "Failed to write page"),
    ("cli.error_export", "Failed to export translation table"),

    // Form validation
    ("form.error.name_required", "Please enter your full name"),
    ("form.error.email_required", "Please enter your email"),
    ("form.error.email_invalid", "The email address is not valid"),
    ("form.error.service_unknown", "Unknown service option"),
    ("form.error.unknown_field", "Unknown form field"),
];
