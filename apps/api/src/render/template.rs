// Fixed visual template. Registered under an `.html` name so every inserted
// value goes through tera's HTML autoescaping.

pub const TEMPLATE_NAME: &str = "portfolio.html";

pub const PORTFOLIO_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ name }} - Portfolio</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&amp;display=swap" rel="stylesheet">
    <style>
        body {
            font-family: 'Inter', sans-serif;
            background-color: #f8fafc;
            color: #334155;
        }
        .section-title {
            font-size: 1.875rem;
            font-weight: 700;
            color: #1e293b;
            margin-bottom: 1.5rem;
            border-bottom-width: 2px;
            border-color: #6366f1;
            padding-bottom: 0.5rem;
        }
        .card {
            background-color: white;
            padding: 1.5rem;
            border-radius: 0.75rem;
            box-shadow: 0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1);
            transition: box-shadow 0.3s ease-in-out;
        }
        .card:hover {
            box-shadow: 0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1);
        }
        .link-hover:hover {
            color: #4f46e5;
            text-decoration: underline;
        }
    </style>
</head>
<body class="antialiased">
    <div class="container mx-auto px-4 py-8 md:py-16 max-w-4xl">
        <header class="text-center mb-12">
            <h1 class="text-5xl md:text-6xl font-extrabold text-gray-900 mb-4">{{ name }}</h1>
            <p class="text-xl md:text-2xl text-gray-600 mb-6">{{ tagline }}</p>
            <div class="flex flex-wrap justify-center gap-x-6 gap-y-3 text-lg text-gray-700">
{%- if contact.email %}
                <a href="mailto:{{ contact.email }}" class="flex items-center space-x-2 link-hover">
                    <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" viewBox="0 0 20 20" fill="currentColor"><path d="M2.003 5.884L10 9.882l7.997-3.998A2 2 0 0016 4H4a2 2 0 00-1.997 1.884z" /><path d="M18 8.118l-8 4-8-4V14a2 2 0 002 2h12a2 2 0 002-2V8.118z" /></svg>
                    <span>{{ contact.email }}</span>
                </a>
{%- endif %}
{%- if contact.phone %}
                <a href="tel:{{ contact.phone }}" class="flex items-center space-x-2 link-hover">
                    <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" viewBox="0 0 20 20" fill="currentColor"><path d="M2 3a1 1 0 011-1h2.153a1 1 0 01.986.836l.74 4.435a1 1 0 01-.54 1.06l-1.548.774a11.037 11.037 0 006.105 6.105l.774-1.548a1 1 0 011.059-.54l4.435.74a1 1 0 01.836.986V17a1 1 0 01-1 1h-2C7.82 18 2 12.18 2 5V3z" /></svg>
                    <span>{{ contact.phone }}</span>
                </a>
{%- endif %}
{%- if contact.linkedin %}
                <a href="{{ contact.linkedin }}" target="_blank" rel="noopener noreferrer" class="flex items-center space-x-2 link-hover">
                    <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" class="h-5 w-5"><path d="M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.27V9.773h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433a2.462 2.462 0 01-2.462-2.465c0-1.366.992-2.465 2.462-2.465 1.473 0 2.466 1.099 2.466 2.465 0 1.367-.993 2.465-2.466 2.465zm1.785 13.019H3.55v-11.66h3.572v11.66zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.453c.979 0 1.776-.773 1.776-1.729V1.729C24 .774 23.203 0 22.225 0z"/></svg>
                    <span>LinkedIn</span>
                </a>
{%- endif %}
{%- if contact.github %}
                <a href="{{ contact.github }}" target="_blank" rel="noopener noreferrer" class="flex items-center space-x-2 link-hover">
                    <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" class="h-5 w-5"><path fill-rule="evenodd" d="M12 2C6.477 2 2 6.484 2 12.017c0 4.425 2.865 8.18 6.839 9.504.5.092.682-.217.682-.483 0-.237-.008-.868-.013-1.703-2.782.605-3.369-1.343-3.369-1.343-.454-1.158-1.11-1.466-1.11-1.466-.908-.62.069-.608.069-.608 1.003.07 1.531 1.032 1.531 1.032.892 1.529 2.341 1.088 2.91.832.092-.647.35-1.088.636-1.338-2.22-.253-4.555-1.113-4.555-4.953 0-1.098.392-1.998 1.03-2.704-.103-.254-.446-1.284.098-2.67 0 0 .84-.27 2.75 1.026A9.564 9.564 0 0112 6.844c.85.004 1.705.115 2.504.337 1.909-1.296 2.747-1.026 2.747-1.026.546 1.386.202 2.416.099 2.67.638.706 1.029 1.606 1.029 2.704 0 3.848-2.339 4.695-4.566 4.943.359.309.678.92.678 1.855 0 1.338-.012 2.419-.012 2.747 0 .268.18.579.688.482C21.137 20.175 24 16.42 24 12.017 24 6.484 19.522 2 12 2z" clip-rule="evenodd" /></svg>
                    <span>GitHub</span>
                </a>
{%- endif %}
            </div>
        </header>
{% if summary %}
        <section class="mb-12">
            <h2 class="section-title">Summary</h2>
            <p class="text-lg leading-relaxed text-gray-700">{{ summary }}</p>
        </section>
{% endif %}
{%- if experience %}
        <section class="mb-12">
            <h2 class="section-title">Experience</h2>
            <div class="space-y-6">
{%- for job in experience %}
                <div class="card">
                    <h3 class="text-xl font-semibold text-gray-800">{{ job.job_title }} at {{ job.company }}</h3>
                    <p class="text-indigo-600 font-medium">{{ job.location }}</p>
                    <p class="text-gray-600 text-sm">{{ job.dates }}</p>
                    <ul class="list-disc list-inside mt-3 text-gray-700 leading-relaxed space-y-1">
                        {% for bullet in job.bullets %}<li>{{ bullet }}</li>{% endfor %}
                    </ul>
                </div>
{%- endfor %}
            </div>
        </section>
{% endif %}
{%- if education %}
        <section class="mb-12">
            <h2 class="section-title">Education</h2>
            <div class="space-y-6">
{%- for school in education %}
                <div class="card">
                    <h3 class="text-xl font-semibold text-gray-800">{{ school.institution }}</h3>
                    <p class="text-indigo-600 font-medium">{{ school.degree }}</p>
                    <p class="text-gray-600 text-sm">{{ school.dates }}</p>
                </div>
{%- endfor %}
            </div>
        </section>
{% endif %}
{%- if projects %}
        <section class="mb-12">
            <h2 class="section-title">Projects</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
{%- for project in projects %}
                <div class="card">
                    <h3 class="text-xl font-semibold text-gray-800 mb-2">{{ project.name }}</h3>
                    <p class="text-indigo-600 text-sm mb-3">
                        <span class="font-medium">Technologies:</span> {{ project.technologies }}
                    </p>
                    <ul class="list-disc list-inside mt-3 text-gray-700 leading-relaxed space-y-1">
                        {% for bullet in project.bullets %}<li>{{ bullet }}</li>{% endfor %}
                    </ul>
                </div>
{%- endfor %}
            </div>
        </section>
{% endif %}
{%- if certifications %}
        <section class="mb-12">
            <h2 class="section-title">Certifications</h2>
            <div class="space-y-6">
{%- for cert in certifications %}
                <div class="card">
                    <h3 class="text-xl font-semibold text-gray-800">{{ cert.name }}</h3>
                    <p class="text-indigo-600 font-medium">{{ cert.issuer }}</p>
                    <p class="text-gray-600 text-sm">{{ cert.date }}</p>
                    <p class="text-gray-700 leading-relaxed mt-3">{{ cert.description }}</p>
                </div>
{%- endfor %}
            </div>
        </section>
{% endif %}
{%- if skills %}
        <section class="mb-12">
            <h2 class="section-title">Skills</h2>
            <div class="flex flex-wrap gap-3 text-lg">
                {% for skill in skills %}<span class="bg-indigo-100 text-indigo-800 px-4 py-2 rounded-full font-medium">{{ skill }}</span>{% endfor %}
            </div>
        </section>
{% endif %}
        <footer class="text-center text-gray-500 text-sm mt-12 pt-8 border-t border-gray-200">
            &copy; {{ year }} {{ name }}. All rights reserved.
        </footer>
    </div>
</body>
</html>
"##;
